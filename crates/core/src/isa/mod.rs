//! Instruction Set Architecture definitions.
//!
//! Contains the encoding table, register name mappings, decoding logic,
//! and the disassembler.
//!
//! The encoding is fixed: nine opcodes, each followed by zero, one, or
//! two operand bytes. Register operands are the aliased memory
//! addresses of `r1` and `r2`; addresses and immediates are plain
//! bytes.

/// Register mnemonic ↔ aliased address mappings.
pub mod abi;

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Encoding table and decoded instruction forms.
pub mod instruction;

/// Opcode byte values.
pub mod opcodes;

pub use instruction::{Instruction, Opcode, OperandKind};
