//! # Whole-Program Tests
//!
//! Assembled programs run end to end: the canonical sum round trip and
//! a countdown loop exercising every instruction class together.

use bytevm_core::common::constants::DEFAULT_LOAD_OFFSET;
use bytevm_core::sim::loader;
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

#[test]
fn assembled_sum_program_round_trips() {
    // load r1 1 is a self-load through the alias (cell 1 is r1), so the
    // program reduces to r1 ← r1 + r2; mem[0] ← r1.
    let mut ctx = TestContext::with_program(
        "load r1 1\nload r2 2\nadd r1 r2\nstore r1 0\nhalt",
    );
    ctx.poke(1, 0x05);
    ctx.poke(2, 0x03);
    ctx.run(100).unwrap();

    assert!(ctx.machine.halted());
    assert_eq!(ctx.peek(0), 0x08);
    // The program is 13 bytes; the halt opcode sits at offset 20 and
    // the final PC rests one byte past it.
    assert_eq!(ctx.machine.pc(), DEFAULT_LOAD_OFFSET + 13);
    assert_eq!(ctx.machine.steps(), 5);
}

#[test]
fn sum_wraps_like_the_alu() {
    let mut ctx = TestContext::with_program(
        "load r1 1\nload r2 2\nadd r1 r2\nstore r1 0\nhalt",
    );
    ctx.poke(1, 200);
    ctx.poke(2, 100);
    ctx.run(100).unwrap();
    assert_eq!(ctx.peek(0), 44);
}

#[test]
fn countdown_loop_multiplies_by_repeated_addition() {
    // Computes mem[0] = 7 * mem[1] by looping SUBI/BEQZ/JUMP:
    //
    //   8: beqz r1 17     taken -> 25 (halt)
    //  11: load r2 0
    //  14: addi r2 7
    //  17: store r2 0
    //  20: subi r1 1
    //  23: jump 8
    //  25: halt
    let source = "beqz r1 17\nload r2 0\naddi r2 7\nstore r2 0\nsubi r1 1\njump 8\nhalt";
    let mut ctx = TestContext::with_program(source);
    ctx.poke(1, 6);
    ctx.run(1000).unwrap();

    assert!(ctx.machine.halted());
    assert_eq!(ctx.peek(0), 42);
    assert_eq!(ctx.peek(1), 0);
    // Six full iterations of six instructions, the final taken branch,
    // and the halt.
    assert_eq!(ctx.machine.steps(), 38);
    assert_eq!(ctx.machine.pc(), 26);
}

#[test]
fn program_layout_in_memory_matches_the_assembler_output() {
    let source = "load r1 1\nhalt";
    let program = bytevm_core::asm::assemble(source).unwrap();

    let mut image = vec![0u8; 64];
    loader::load_source(&mut image, source, DEFAULT_LOAD_OFFSET).unwrap();
    assert_eq!(&image[DEFAULT_LOAD_OFFSET..DEFAULT_LOAD_OFFSET + program.len()], &program[..]);
    // Bytes 0..8 stay data cells.
    assert_eq!(&image[..DEFAULT_LOAD_OFFSET], &[0u8; 8]);
}
