//! # Decoder Tests
//!
//! Verifies bounds-checked fetching, encoding-table lookup, and operand
//! extraction at arbitrary program counters.

use bytevm_core::isa::decode::decode;
use bytevm_core::isa::Instruction;
use bytevm_core::VmError;

#[test]
fn decodes_two_operand_instruction() {
    let mem = [0x01, 0x01, 0x07];
    assert_eq!(
        decode(&mem, 0).unwrap(),
        Instruction::Load { reg: 1, addr: 7 }
    );
}

#[test]
fn decodes_at_nonzero_pc() {
    let mem = [0x00, 0x00, 0x03, 0x01, 0x02];
    assert_eq!(
        decode(&mem, 2).unwrap(),
        Instruction::Add { dst: 1, src: 2 }
    );
}

#[test]
fn decodes_one_operand_jump() {
    // JUMP reads a single operand; the byte after it belongs to the
    // next instruction and must not be touched.
    let mem = [0x07, 0x08];
    assert_eq!(decode(&mem, 0).unwrap(), Instruction::Jump { target: 8 });
}

#[test]
fn decodes_halt_without_reading_operands() {
    // HALT at the very last byte: no operand fetches may occur.
    let mem = [0x00, 0xFF];
    assert_eq!(decode(&mem, 1).unwrap(), Instruction::Halt);
}

#[test]
fn fetch_at_buffer_length_is_out_of_bounds() {
    let mem = [0xFF, 0xFF];
    assert_eq!(
        decode(&mem, 2),
        Err(VmError::OutOfBounds { addr: 2, len: 2 })
    );
}

#[test]
fn operand_fetch_past_the_end_is_out_of_bounds() {
    // Opcode fits, second operand byte does not.
    let mem = [0x01, 0x01];
    assert_eq!(
        decode(&mem, 0),
        Err(VmError::OutOfBounds { addr: 2, len: 2 })
    );
}

#[test]
fn unassigned_byte_is_invalid_opcode_with_position() {
    let mem = [0x00, 0xAB];
    assert_eq!(
        decode(&mem, 1),
        Err(VmError::InvalidOpcode { opcode: 0xAB, pc: 1 })
    );
}
