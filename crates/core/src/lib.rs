//! Byte-code virtual machine library.
//!
//! This crate implements a minimal byte machine with the following:
//! 1. **ISA:** A nine-opcode encoding table, decoder, and disassembler.
//! 2. **Assembler:** Line-oriented mnemonic text to flat machine bytes.
//! 3. **Core:** The fetch/decode/execute loop over an owned memory buffer,
//!    with registers aliased into low memory and per-step trace events.
//! 4. **Simulation:** Program placement helpers and run configuration.
//!
//! Memory is a fixed-length byte buffer holding program and data alike;
//! the only structure is convention (programs at offset 8, register
//! cells at addresses 1 and 2). One run owns one buffer.

/// Assembler (mnemonic text → bytes).
pub mod asm;
/// Common types and constants (errors, widths, offsets).
pub mod common;
/// Run configuration (defaults, JSON deserialization).
pub mod config;
/// Interpreter core (machine, execution loop, step events).
pub mod core;
/// Instruction set (opcodes, encoding table, decode, disassembly).
pub mod isa;
/// Host-side setup (program placement).
pub mod sim;

/// Run parameters; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The machine; owns a memory buffer and tracks the PC explicitly.
pub use crate::core::Machine;
/// The typed failure surface of assembly and execution.
pub use crate::common::VmError;
