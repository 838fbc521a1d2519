//! Opcode byte values.
//!
//! Defines the opcode byte for every instruction in the encoding table.

/// Load a memory cell into a register cell (LOAD reg, addr).
pub const OP_LOAD: u8 = 0x01;

/// Store a register cell into a memory cell (STORE reg, addr).
pub const OP_STORE: u8 = 0x02;

/// Register-register addition, wrapping modulo 256 (ADD regA, regB).
pub const OP_ADD: u8 = 0x03;

/// Register-register subtraction, wrapping modulo 256 (SUB regA, regB).
pub const OP_SUB: u8 = 0x04;

/// Add-immediate, wrapping modulo 256 (ADDI reg, imm).
pub const OP_ADDI: u8 = 0x05;

/// Subtract-immediate, wrapping modulo 256 (SUBI reg, imm).
pub const OP_SUBI: u8 = 0x06;

/// Absolute jump (JUMP addr).
pub const OP_JUMP: u8 = 0x07;

/// Branch by a PC-relative offset when the tested register is zero (BEQZ reg, off).
pub const OP_BEQZ: u8 = 0x08;

/// Stop execution (HALT).
pub const OP_HALT: u8 = 0xFF;
