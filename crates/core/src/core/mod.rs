//! Interpreter core: the machine and its observation seam.

/// The machine state and fetch/decode/execute loop.
pub mod machine;

/// Per-step events and the observer trait.
pub mod observer;

pub use machine::{run, Machine};
pub use observer::{Effect, StepEvent, StepObserver};
