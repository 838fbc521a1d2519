//! Machine and assembler error definitions.
//!
//! This module defines the error handling for the virtual machine. It provides:
//! 1. **Assembly Errors:** Unknown mnemonics and malformed operands, with line context.
//! 2. **Execution Errors:** Out-of-bounds accesses and invalid opcodes, with position context.
//! 3. **Error Handling:** Integration with standard Rust error traits via `thiserror`.

use thiserror::Error;

/// Errors raised while assembling source text or executing a program.
///
/// Every variant terminates the current operation; none are retried
/// internally. Each carries enough context to reconstruct the fault:
/// the offending token or byte and where it was encountered. On an
/// execution error the memory image is left in its last-mutated state;
/// callers must not treat it as valid output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// The assembler encountered a first token with no encoding entry.
    #[error("unknown mnemonic `{mnemonic}` on line {line}")]
    UnknownMnemonic {
        /// The unrecognized mnemonic token, as written.
        mnemonic: String,
        /// 1-based source line number.
        line: usize,
    },

    /// The assembler could not resolve a required operand.
    ///
    /// Raised both when an operand token is missing and when it cannot
    /// be parsed as the expected register name or integer literal.
    #[error("malformed operand for `{mnemonic}` on line {line}: {detail}")]
    MalformedOperand {
        /// The instruction mnemonic whose operand failed to resolve.
        mnemonic: String,
        /// 1-based source line number.
        line: usize,
        /// What went wrong with which token.
        detail: String,
    },

    /// A fetch or data access landed at or beyond the buffer's valid range.
    #[error("memory access at address {addr} is out of bounds for a {len}-byte buffer")]
    OutOfBounds {
        /// The offending byte offset.
        addr: usize,
        /// Length of the memory buffer.
        len: usize,
    },

    /// The interpreter fetched a byte with no encoding entry.
    #[error("invalid opcode {opcode:#04x} at pc {pc}")]
    InvalidOpcode {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// Program counter at which it was fetched.
        pc: usize,
    },
}
