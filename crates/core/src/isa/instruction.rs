//! Instruction encoding table and decoded instruction forms.
//!
//! This module is the single source of truth for the instruction set. It provides:
//! 1. **Encoding Table:** The [`Opcode`] enum mapping mnemonics to opcode bytes and operand kinds.
//! 2. **Decoded Form:** The [`Instruction`] enum, one tagged variant per operation,
//!    so execution is an exhaustive match and every encoding entry provably has a handler.

use serde::Serialize;

use crate::isa::opcodes;

/// What an operand byte means for a given instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OperandKind {
    /// A register name (`r1`/`r2`), encoded as the register's aliased address.
    Register,
    /// A memory address literal.
    Address,
    /// An immediate value.
    Immediate,
}

/// One row of the encoding table.
///
/// `Opcode` ties together a mnemonic, an opcode byte, and the kinds of
/// the operand bytes that follow it. The assembler drives parsing from
/// [`Opcode::operands`]; the decoder maps bytes back through
/// [`Opcode::from_byte`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum Opcode {
    /// reg ← Memory\[addr\]
    Load = opcodes::OP_LOAD,
    /// Memory\[addr\] ← reg
    Store = opcodes::OP_STORE,
    /// regA ← (regA + regB) mod 256
    Add = opcodes::OP_ADD,
    /// regA ← (regA − regB) mod 256
    Sub = opcodes::OP_SUB,
    /// reg ← (reg + imm) mod 256
    Addi = opcodes::OP_ADDI,
    /// reg ← (reg − imm) mod 256
    Subi = opcodes::OP_SUBI,
    /// PC ← addr (absolute, no default advance)
    Jump = opcodes::OP_JUMP,
    /// If reg == 0: PC ← PC + offset, else normal advance
    Beqz = opcodes::OP_BEQZ,
    /// Stop execution
    Halt = opcodes::OP_HALT,
}

impl Opcode {
    /// Looks up an opcode byte in the encoding table.
    ///
    /// Returns `None` for bytes with no encoding entry; the interpreter
    /// turns that into an `InvalidOpcode` failure.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            opcodes::OP_LOAD => Some(Self::Load),
            opcodes::OP_STORE => Some(Self::Store),
            opcodes::OP_ADD => Some(Self::Add),
            opcodes::OP_SUB => Some(Self::Sub),
            opcodes::OP_ADDI => Some(Self::Addi),
            opcodes::OP_SUBI => Some(Self::Subi),
            opcodes::OP_JUMP => Some(Self::Jump),
            opcodes::OP_BEQZ => Some(Self::Beqz),
            opcodes::OP_HALT => Some(Self::Halt),
            _ => None,
        }
    }

    /// Returns the opcode byte for this encoding entry.
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    /// Resolves a mnemonic token, case-insensitively.
    pub fn from_mnemonic(token: &str) -> Option<Self> {
        const TABLE: [(&str, Opcode); 9] = [
            ("load", Opcode::Load),
            ("store", Opcode::Store),
            ("add", Opcode::Add),
            ("sub", Opcode::Sub),
            ("addi", Opcode::Addi),
            ("subi", Opcode::Subi),
            ("jump", Opcode::Jump),
            ("beqz", Opcode::Beqz),
            ("halt", Opcode::Halt),
        ];
        TABLE
            .iter()
            .find(|(name, _)| token.eq_ignore_ascii_case(name))
            .map(|&(_, op)| op)
    }

    /// Returns the canonical (lowercase) mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Store => "store",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Addi => "addi",
            Self::Subi => "subi",
            Self::Jump => "jump",
            Self::Beqz => "beqz",
            Self::Halt => "halt",
        }
    }

    /// Returns the operand kinds for this instruction, in encoding order.
    ///
    /// An instruction contributes `1 + operands().len()` bytes to an
    /// assembled program.
    pub fn operands(self) -> &'static [OperandKind] {
        use OperandKind::{Address, Immediate, Register};
        match self {
            Self::Load => &[Register, Address],
            Self::Store => &[Register, Address],
            Self::Add | Self::Sub => &[Register, Register],
            Self::Addi | Self::Subi => &[Register, Immediate],
            Self::Jump => &[Address],
            Self::Beqz => &[Register, Immediate],
            Self::Halt => &[],
        }
    }
}

/// A decoded instruction: opcode plus resolved operand bytes.
///
/// Constructed transiently by the decoder at each fetch and consumed by
/// the execute step; never persisted. The payload names spell out what
/// each operand byte means so execution reads like the encoding table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Instruction {
    /// reg ← Memory\[addr\]
    Load {
        /// Destination register cell address.
        reg: u8,
        /// Source memory address.
        addr: u8,
    },
    /// Memory\[addr\] ← reg
    Store {
        /// Source register cell address.
        reg: u8,
        /// Destination memory address.
        addr: u8,
    },
    /// dst ← (dst + src) mod 256
    Add {
        /// Destination register cell address.
        dst: u8,
        /// Source register cell address.
        src: u8,
    },
    /// dst ← (dst − src) mod 256
    Sub {
        /// Destination register cell address.
        dst: u8,
        /// Source register cell address.
        src: u8,
    },
    /// reg ← (reg + imm) mod 256
    Addi {
        /// Register cell address.
        reg: u8,
        /// Immediate operand.
        imm: u8,
    },
    /// reg ← (reg − imm) mod 256
    Subi {
        /// Register cell address.
        reg: u8,
        /// Immediate operand.
        imm: u8,
    },
    /// PC ← target, absolute.
    Jump {
        /// Absolute target address.
        target: u8,
    },
    /// If Memory\[reg\] == 0, PC advances by `offset` relative to this
    /// instruction's own PC; otherwise PC advances normally.
    Beqz {
        /// Tested register cell address.
        reg: u8,
        /// PC-relative offset applied when the test passes.
        offset: u8,
    },
    /// Stop execution.
    Halt,
}

impl Instruction {
    /// Returns the encoding-table entry this instruction decodes from.
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Load { .. } => Opcode::Load,
            Self::Store { .. } => Opcode::Store,
            Self::Add { .. } => Opcode::Add,
            Self::Sub { .. } => Opcode::Sub,
            Self::Addi { .. } => Opcode::Addi,
            Self::Subi { .. } => Opcode::Subi,
            Self::Jump { .. } => Opcode::Jump,
            Self::Beqz { .. } => Opcode::Beqz,
            Self::Halt => Opcode::Halt,
        }
    }
}
