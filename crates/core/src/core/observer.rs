//! Per-step execution events for external trace consumers.
//!
//! The interpreter mutates nothing but memory; any human-readable trace
//! or description is a presentation concern layered outside the core.
//! This module is the seam: each executed instruction produces a
//! [`StepEvent`] that an external [`StepObserver`] may record, format,
//! or forward. The core itself formats no text.

use serde::Serialize;

use crate::isa::Instruction;

/// What an executed instruction did to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// A byte was written to memory (register-aliased cells included).
    Write {
        /// Destination address.
        addr: usize,
        /// Value written.
        value: u8,
    },
    /// Control transferred to an absolute target.
    Jump {
        /// The new program counter.
        target: usize,
    },
    /// A conditional branch was evaluated.
    Branch {
        /// Whether the PC-relative offset was applied.
        taken: bool,
        /// The program counter after the branch.
        target: usize,
    },
    /// Execution stopped.
    Halt,
}

/// One fetch/decode/execute step, as seen from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepEvent {
    /// Program counter the instruction was fetched from.
    pub pc: usize,
    /// The decoded instruction.
    pub instruction: Instruction,
    /// The observable effect of executing it.
    pub effect: Effect,
}

/// Receives every step event during an observed run.
///
/// Implementors are external trace consumers: a disassembling printer,
/// a recording buffer in tests, a progress gauge in a host.
pub trait StepObserver {
    /// Called after each instruction executes, including the halt.
    fn on_step(&mut self, event: &StepEvent);
}
