//! # Machine State Tests
//!
//! Verifies register aliasing, halting behavior, the PC bounds
//! invariant, and that failing instructions leave memory untouched.

use bytevm_core::common::constants::DEFAULT_LOAD_OFFSET;
use bytevm_core::isa::abi;
use bytevm_core::{Machine, VmError};

use crate::common::harness::TestContext;

#[test]
fn registers_are_aliased_memory_cells() {
    // LOAD writes through the register mnemonic; the write must be
    // visible at the aliased address, since it is the same cell.
    let mut ctx = TestContext::with_program("load r1 7\nhalt");
    ctx.poke(7, 0x2A);
    ctx.run(10).unwrap();
    assert!(ctx.machine.halted());
    assert_eq!(ctx.peek(abi::REG_R1 as usize), 0x2A);
}

#[test]
fn store_reads_the_aliased_cell() {
    // Seeding the cell directly is the same as writing the register.
    let mut ctx = TestContext::with_program("store r2 0\nhalt");
    ctx.poke(abi::REG_R2 as usize, 9);
    ctx.run(10).unwrap();
    assert_eq!(ctx.peek(0), 9);
}

#[test]
fn halt_leaves_pc_one_past_its_opcode() {
    let mut ctx = TestContext::with_program("halt");
    ctx.run(10).unwrap();
    assert!(ctx.machine.halted());
    assert_eq!(ctx.machine.pc(), DEFAULT_LOAD_OFFSET + 1);
    assert_eq!(ctx.machine.steps(), 1);
}

#[test]
fn stepping_a_halted_machine_does_not_advance() {
    let mut ctx = TestContext::with_program("halt");
    ctx.run(10).unwrap();
    let pc = ctx.machine.pc();
    let steps = ctx.machine.steps();
    let _ = ctx.machine.step().unwrap();
    assert_eq!(ctx.machine.pc(), pc);
    assert_eq!(ctx.machine.steps(), steps);
}

#[test]
fn fetch_at_buffer_length_fails_instead_of_halting() {
    // An empty program runs off the end of the image: the PC invariant
    // is violated before the fetch, which is an error, never a halt.
    let mut machine = Machine::with_start(vec![0x01, 0x01, 0x00], 3);
    assert_eq!(
        machine.step(),
        Err(VmError::OutOfBounds { addr: 3, len: 3 })
    );
    assert!(!machine.halted());
}

#[test]
fn data_access_outside_a_short_buffer_is_out_of_bounds() {
    // The interpreter treats the buffer length as a parameter; operand
    // addresses can point past a buffer shorter than 256 bytes.
    let mut image = vec![0u8; 16];
    image[8] = 0x01; // load r1 200
    image[9] = 0x01;
    image[10] = 200;
    let mut machine = Machine::new(image);
    assert_eq!(
        machine.step(),
        Err(VmError::OutOfBounds { addr: 200, len: 16 })
    );
}

#[test]
fn invalid_opcode_reports_byte_and_pc() {
    let mut ctx = TestContext::new();
    ctx.poke(8, 0xAB);
    assert_eq!(
        ctx.machine.step(),
        Err(VmError::InvalidOpcode { opcode: 0xAB, pc: 8 })
    );
}

#[test]
fn failing_instruction_leaves_prior_mutations_intact() {
    // Two good instructions, then an unassigned opcode byte. Memory
    // must hold exactly the state the second instruction produced.
    let mut ctx = TestContext::with_program("addi r1 5\nstore r1 0");
    ctx.poke(8 + 6, 0xAB);
    let err = ctx.run(10).unwrap_err();
    assert_eq!(err, VmError::InvalidOpcode { opcode: 0xAB, pc: 14 });
    assert_eq!(ctx.peek(1), 5);
    assert_eq!(ctx.peek(0), 5);
    assert_eq!(ctx.machine.steps(), 2);
}

#[test]
fn run_returns_the_mutated_buffer() {
    let mut image = vec![0u8; 64];
    bytevm_core::sim::loader::load_source(&mut image, "addi r1 3\nstore r1 0\nhalt", 8).unwrap();
    let result = bytevm_core::core::run(image, 8).unwrap();
    assert_eq!(result[0], 3);
    assert_eq!(result[1], 3);
}

#[test]
fn memory_length_is_a_buffer_property() {
    // A 32-byte image works as long as the program stays inside it.
    let mut image = vec![0u8; 32];
    bytevm_core::sim::loader::load_source(&mut image, "addi r2 1\nhalt", 8).unwrap();
    let mut machine = Machine::new(image);
    machine.run().unwrap();
    assert_eq!(machine.memory().len(), 32);
    assert_eq!(machine.memory()[2], 1);
}
