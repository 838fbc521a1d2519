//! Program placement into memory images.
//!
//! The assembler emits flat bytes and deliberately does not touch
//! memory; placement is the host's side of the contract. The
//! convention is offset 8, leaving bytes 0–7 as data cells (including
//! the register-aliased cells at addresses 1 and 2).

use crate::asm::assemble;
use crate::common::VmError;

/// Copies an assembled program into a memory image at `offset`.
///
/// # Arguments
///
/// * `memory` - The target memory image.
/// * `program` - Assembled bytes.
/// * `offset` - Byte offset to place the first opcode at.
///
/// # Returns
///
/// `OutOfBounds` when the program does not fit, with the first offending
/// address; in that case nothing is copied.
pub fn place(memory: &mut [u8], program: &[u8], offset: usize) -> Result<(), VmError> {
    let end = offset.checked_add(program.len());
    match end {
        Some(end) if end <= memory.len() => {
            memory[offset..end].copy_from_slice(program);
            Ok(())
        }
        _ => Err(VmError::OutOfBounds {
            addr: memory.len().max(offset),
            len: memory.len(),
        }),
    }
}

/// Assembles `source` and places the result at `offset`.
///
/// Convenience for hosts that accept program text directly.
pub fn load_source(memory: &mut [u8], source: &str, offset: usize) -> Result<(), VmError> {
    let program = assemble(source)?;
    place(memory, &program, offset)
}
