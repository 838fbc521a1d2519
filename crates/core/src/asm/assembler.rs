//! Assembly text parser and byte emitter.
//!
//! Converts line-oriented mnemonic text into a flat byte sequence using
//! the encoding table.
//!
//! # Syntax
//!
//! ```text
//! load r1 1      # one instruction per non-empty line
//! addi r2 0x10   # operands split on whitespace; `#` starts a comment
//! halt
//! ```
//!
//! - Mnemonics and register names are case-insensitive.
//! - Commas between operands are optional.
//! - Register operands must be `r1` or `r2`.
//! - Address and immediate literals are decimal or `0x`-prefixed hex,
//!   masked to the 0–255 range.
//!
//! Each instruction contributes `1 + operand_count` bytes, with no
//! padding or implicit filler between instructions. The assembler
//! never places bytes into machine memory; see [`crate::sim::loader`]
//! for placement.

use crate::common::VmError;
use crate::isa::instruction::{Opcode, OperandKind};
use crate::isa::abi;

const COMMENT_CHAR: char = '#';

/// Parses a register operand token into its aliased address.
fn parse_register(tok: &str, mnemonic: &str, line: usize) -> Result<u8, VmError> {
    abi::lookup(tok).ok_or_else(|| VmError::MalformedOperand {
        mnemonic: mnemonic.to_owned(),
        line,
        detail: format!("expected a register name (r1/r2), got `{tok}`"),
    })
}

/// Parses an address/immediate literal, masked to the 0–255 range.
///
/// Accepts decimal and `0x`-prefixed hex; negative decimal values wrap
/// through the mask (`-1` → 255).
fn parse_int(tok: &str, mnemonic: &str, line: usize) -> Result<u8, VmError> {
    let parsed = if let Some(hex) = tok.strip_prefix("0x").or_else(|| tok.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16)
    } else {
        tok.parse::<i64>()
    };
    parsed
        .map(|v| (v & 0xFF) as u8)
        .map_err(|_| VmError::MalformedOperand {
            mnemonic: mnemonic.to_owned(),
            line,
            detail: format!("`{tok}` is not an integer"),
        })
}

/// Assembles one tokenized line, appending its bytes to `out`.
fn assemble_line(tokens: &[&str], line: usize, out: &mut Vec<u8>) -> Result<(), VmError> {
    let mnemonic = tokens[0];
    let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| VmError::UnknownMnemonic {
        mnemonic: mnemonic.to_owned(),
        line,
    })?;

    let mut bytes = [0u8; 2];
    for (index, kind) in opcode.operands().iter().enumerate() {
        let tok = tokens.get(index + 1).ok_or_else(|| VmError::MalformedOperand {
            mnemonic: opcode.mnemonic().to_owned(),
            line,
            detail: format!("missing operand {}", index + 1),
        })?;
        bytes[index] = match kind {
            OperandKind::Register => parse_register(tok, opcode.mnemonic(), line)?,
            OperandKind::Address | OperandKind::Immediate => {
                parse_int(tok, opcode.mnemonic(), line)?
            }
        };
    }

    out.push(opcode.to_byte());
    out.extend_from_slice(&bytes[..opcode.operands().len()]);
    Ok(())
}

/// Assembles source text into a flat byte sequence.
///
/// Each non-empty line is one instruction: the first whitespace-split
/// token is the mnemonic, the rest are operands resolved per the
/// encoding table's operand kinds. Blank lines and `#` comments are
/// skipped.
///
/// # Arguments
///
/// * `source` - The program text.
///
/// # Returns
///
/// The assembled bytes, or the first failure. On error nothing is
/// emitted, so there is no partial output to misplace into memory.
pub fn assemble(source: &str) -> Result<Vec<u8>, VmError> {
    let mut out = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let code = raw.split(COMMENT_CHAR).next().unwrap_or("").replace(',', " ");
        let tokens: Vec<&str> = code.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        assemble_line(&tokens, index + 1, &mut out)?;
    }
    Ok(out)
}
