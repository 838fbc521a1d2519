//! Instruction disassembler.
//!
//! Converts a decoded instruction back into assembly text for debug
//! tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use bytevm_core::isa::disasm::disassemble;
//! use bytevm_core::isa::instruction::Instruction;
//!
//! let text = disassemble(&Instruction::Addi { reg: 1, imm: 7 });
//! assert_eq!(text, "addi r1, 7");
//! ```

use crate::isa::abi;
use crate::isa::instruction::Instruction;

/// Renders a register-position operand byte.
///
/// Bytes outside the register alias range render as raw cells
/// (`[7]`), legal to execute but not spellable in the assembler.
fn reg(addr: u8) -> String {
    abi::name(addr).map_or_else(|| format!("[{addr}]"), str::to_owned)
}

/// Disassembles a decoded instruction into a human-readable string.
///
/// Operand addresses and immediates render in decimal, matching what
/// the assembler accepts, so output round-trips through `assemble`.
pub fn disassemble(inst: &Instruction) -> String {
    match *inst {
        Instruction::Load { reg: r, addr } => format!("load {}, {}", reg(r), addr),
        Instruction::Store { reg: r, addr } => format!("store {}, {}", reg(r), addr),
        Instruction::Add { dst, src } => format!("add {}, {}", reg(dst), reg(src)),
        Instruction::Sub { dst, src } => format!("sub {}, {}", reg(dst), reg(src)),
        Instruction::Addi { reg: r, imm } => format!("addi {}, {}", reg(r), imm),
        Instruction::Subi { reg: r, imm } => format!("subi {}, {}", reg(r), imm),
        Instruction::Jump { target } => format!("jump {target}"),
        Instruction::Beqz { reg: r, offset } => format!("beqz {}, {}", reg(r), offset),
        Instruction::Halt => "halt".to_owned(),
    }
}
