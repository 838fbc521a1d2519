//! Run configuration.
//!
//! This module defines the parameters a host supplies for one run. It provides:
//! 1. **Defaults:** Baseline sizing constants (memory size, load offset).
//! 2. **Structure:** A single flat [`Config`], deserializable from JSON.
//!
//! Configuration is host-facing: the core's `Machine` takes its buffer
//! and start offset directly, and the step limit is enforced by the
//! host's own loop, never by the interpreter.

use serde::Deserialize;

use crate::common::constants;

/// Default configuration constants.
mod defaults {
    /// Memory image size when the host builds a fresh buffer.
    pub const MEMORY_SIZE: usize = super::constants::DEFAULT_MEMORY_SIZE;

    /// Offset programs are placed at and execution starts from.
    pub const LOAD_OFFSET: usize = super::constants::DEFAULT_LOAD_OFFSET;
}

/// Parameters for one run of the machine.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Size of a freshly built memory image, in bytes.
    pub memory_size: usize,
    /// Offset where programs are placed and the PC starts.
    pub load_offset: usize,
    /// Optional instruction budget enforced by the host loop.
    ///
    /// `None` runs to halt; a malformed program then spins forever,
    /// which is the machine's documented behavior.
    pub step_limit: Option<u64>,
    /// Emit a disassembled line per executed instruction.
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_size: defaults::MEMORY_SIZE,
            load_offset: defaults::LOAD_OFFSET,
            step_limit: None,
            trace: false,
        }
    }
}

impl Config {
    /// Deserializes a configuration from JSON text.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
