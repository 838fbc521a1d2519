//! Global machine constants.
//!
//! This module defines the system-wide constants of the byte machine. It includes:
//! 1. **Layout Constants:** Memory sizing and the conventional program load offset.
//! 2. **Instruction Constants:** The uniform instruction width used for PC advancement.

/// Uniform instruction width in bytes.
///
/// Every executed instruction advances the program counter by this amount
/// unless it transfers control itself (JUMP, taken BEQZ) or stops the
/// machine (HALT). Addressing stays uniform regardless of operand count.
pub const INSTRUCTION_WIDTH: usize = 3;

/// Conventional offset at which programs are placed in memory.
///
/// Bytes below this offset are left for data, including the
/// register-aliased cells at addresses 1 and 2.
pub const DEFAULT_LOAD_OFFSET: usize = 8;

/// Default memory image size in bytes.
///
/// The interpreter treats the buffer length as a parameter; this is only
/// the size hosts use when they build a fresh image.
pub const DEFAULT_MEMORY_SIZE: usize = 256;

/// Number of low memory cells reserved for data by convention.
///
/// Nothing in the machine enforces the split; programs that overwrite
/// their own bytes are legal, if unwise.
pub const DATA_CELLS: usize = 8;
