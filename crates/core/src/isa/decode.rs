//! Instruction decoder.
//!
//! Turns raw bytes at the current program counter into an
//! [`Instruction`] variant. Every byte read is bounds-checked against
//! the buffer, and the opcode byte is validated against the encoding
//! table before any operand is touched, so a decode failure never
//! mutates machine state.

use crate::common::VmError;
use crate::isa::instruction::{Instruction, Opcode};

/// Reads one byte from `memory`, failing with `OutOfBounds` past the end.
#[inline]
pub(crate) fn fetch(memory: &[u8], addr: usize) -> Result<u8, VmError> {
    memory.get(addr).copied().ok_or(VmError::OutOfBounds {
        addr,
        len: memory.len(),
    })
}

/// Decodes the instruction at `pc`.
///
/// Fetches the opcode byte (failing with `OutOfBounds` when `pc` is not
/// a valid index), maps it through the encoding table (failing with
/// `InvalidOpcode` for unknown bytes), then fetches the operand bytes
/// the table demands, each bounds-checked.
///
/// # Arguments
///
/// * `memory` - The machine's memory buffer.
/// * `pc` - Byte offset of the opcode to decode.
///
/// # Returns
///
/// The decoded [`Instruction`], or the first fetch/lookup failure.
pub fn decode(memory: &[u8], pc: usize) -> Result<Instruction, VmError> {
    let byte = fetch(memory, pc)?;
    let opcode = Opcode::from_byte(byte).ok_or(VmError::InvalidOpcode { opcode: byte, pc })?;

    let arity = opcode.operands().len();
    let a = if arity >= 1 { fetch(memory, pc + 1)? } else { 0 };
    let b = if arity >= 2 { fetch(memory, pc + 2)? } else { 0 };

    Ok(match opcode {
        Opcode::Load => Instruction::Load { reg: a, addr: b },
        Opcode::Store => Instruction::Store { reg: a, addr: b },
        Opcode::Add => Instruction::Add { dst: a, src: b },
        Opcode::Sub => Instruction::Sub { dst: a, src: b },
        Opcode::Addi => Instruction::Addi { reg: a, imm: b },
        Opcode::Subi => Instruction::Subi { reg: a, imm: b },
        Opcode::Jump => Instruction::Jump { target: a },
        Opcode::Beqz => Instruction::Beqz { reg: a, offset: b },
        Opcode::Halt => Instruction::Halt,
    })
}
