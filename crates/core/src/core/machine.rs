//! The virtual machine: memory, program counter, and the execution loop.
//!
//! This module defines the central [`Machine`] structure. It performs:
//! 1. **State Management:** Owns the memory buffer and tracks the PC explicitly.
//! 2. **Execution:** The fetch/decode/execute loop over decoded instruction variants.
//! 3. **Observability:** Per-step events for external trace consumers and
//!    `tracing` spans for diagnostics.
//!
//! Registers are aliased memory cells, so every operation is
//! memory-to-memory: a register operand byte is simply the address of
//! the register's cell. The machine owns its buffer exclusively for the
//! duration of a run; concurrent runs each own their own buffer.

use tracing::{debug, trace};

use crate::common::constants::{DEFAULT_LOAD_OFFSET, INSTRUCTION_WIDTH};
use crate::common::VmError;
use crate::core::observer::{Effect, StepEvent, StepObserver};
use crate::isa::decode::{decode, fetch};
use crate::isa::disasm::disassemble;
use crate::isa::Instruction;

/// The byte machine.
///
/// Holds a memory buffer of caller-chosen length, the program counter,
/// and a halt flag. The buffer length is a property of the buffer, not
/// of the machine; all accesses are checked against it.
#[derive(Debug)]
pub struct Machine {
    mem: Vec<u8>,
    pc: usize,
    halted: bool,
    steps: u64,
}

impl Machine {
    /// Creates a machine over `memory`, starting at the conventional
    /// load offset (8).
    pub fn new(memory: Vec<u8>) -> Self {
        Self::with_start(memory, DEFAULT_LOAD_OFFSET)
    }

    /// Creates a machine over `memory` with an explicit start offset.
    ///
    /// # Arguments
    ///
    /// * `memory` - The memory image, program bytes already placed.
    /// * `start` - Initial program counter.
    pub fn with_start(memory: Vec<u8>, start: usize) -> Self {
        Self {
            mem: memory,
            pc: start,
            halted: false,
            steps: 0,
        }
    }

    /// Current program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Whether the machine has executed a HALT.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Number of instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Read-only view of the memory image.
    pub fn memory(&self) -> &[u8] {
        &self.mem
    }

    /// Mutable view of the memory image, for host-side seeding.
    pub fn memory_mut(&mut self) -> &mut [u8] {
        &mut self.mem
    }

    /// Consumes the machine and releases the memory image.
    pub fn into_memory(self) -> Vec<u8> {
        self.mem
    }

    /// Reads the byte at `addr`, bounds-checked.
    fn read(&self, addr: u8) -> Result<u8, VmError> {
        fetch(&self.mem, addr as usize)
    }

    /// Writes `value` at `addr`, bounds-checked, reporting the write.
    fn write(&mut self, addr: u8, value: u8) -> Result<Effect, VmError> {
        let addr = addr as usize;
        let len = self.mem.len();
        let cell = self
            .mem
            .get_mut(addr)
            .ok_or(VmError::OutOfBounds { addr, len })?;
        *cell = value;
        Ok(Effect::Write { addr, value })
    }

    /// Executes one fetch/decode/execute step.
    ///
    /// Decoding happens entirely before execution, so a failing step
    /// leaves memory exactly as the previous step left it. Stepping a
    /// halted machine reports the halt again without advancing.
    ///
    /// # Returns
    ///
    /// The step's event, or a typed failure (`OutOfBounds` when the PC
    /// or an operand fetch leaves the buffer, `InvalidOpcode` for bytes
    /// outside the encoding table).
    pub fn step(&mut self) -> Result<StepEvent, VmError> {
        if self.halted {
            return Ok(StepEvent {
                pc: self.pc,
                instruction: Instruction::Halt,
                effect: Effect::Halt,
            });
        }

        let pc = self.pc;
        let inst = decode(&self.mem, pc)?;

        let effect = match inst {
            Instruction::Load { reg, addr } => {
                let value = self.read(addr)?;
                let effect = self.write(reg, value)?;
                self.pc = pc + INSTRUCTION_WIDTH;
                effect
            }
            Instruction::Store { reg, addr } => {
                let value = self.read(reg)?;
                let effect = self.write(addr, value)?;
                self.pc = pc + INSTRUCTION_WIDTH;
                effect
            }
            Instruction::Add { dst, src } => {
                let value = self.read(dst)?.wrapping_add(self.read(src)?);
                let effect = self.write(dst, value)?;
                self.pc = pc + INSTRUCTION_WIDTH;
                effect
            }
            Instruction::Sub { dst, src } => {
                let value = self.read(dst)?.wrapping_sub(self.read(src)?);
                let effect = self.write(dst, value)?;
                self.pc = pc + INSTRUCTION_WIDTH;
                effect
            }
            Instruction::Addi { reg, imm } => {
                let value = self.read(reg)?.wrapping_add(imm);
                let effect = self.write(reg, value)?;
                self.pc = pc + INSTRUCTION_WIDTH;
                effect
            }
            Instruction::Subi { reg, imm } => {
                let value = self.read(reg)?.wrapping_sub(imm);
                let effect = self.write(reg, value)?;
                self.pc = pc + INSTRUCTION_WIDTH;
                effect
            }
            Instruction::Jump { target } => {
                // Absolute: no default advance.
                self.pc = target as usize;
                Effect::Jump { target: self.pc }
            }
            Instruction::Beqz { reg, offset } => {
                // The offset is relative to this instruction's own PC,
                // not to the next sequential instruction.
                let taken = self.read(reg)? == 0;
                self.pc = if taken {
                    pc + offset as usize
                } else {
                    pc + INSTRUCTION_WIDTH
                };
                Effect::Branch {
                    taken,
                    target: self.pc,
                }
            }
            Instruction::Halt => {
                // The final PC rests one byte past the halt opcode.
                self.pc = pc + 1;
                self.halted = true;
                Effect::Halt
            }
        };

        self.steps += 1;
        trace!(pc, instruction = %disassemble(&inst), "executed");
        if self.halted {
            debug!(pc = self.pc, steps = self.steps, "machine halted");
        }

        Ok(StepEvent {
            pc,
            instruction: inst,
            effect,
        })
    }

    /// Runs until HALT.
    ///
    /// There is no implicit iteration cap: a program that jumps to
    /// itself loops forever. Hosts that need a bound impose a step
    /// limit at their boundary by looping [`Machine::step`] themselves.
    pub fn run(&mut self) -> Result<(), VmError> {
        while !self.halted {
            let _ = self.step()?;
        }
        Ok(())
    }

    /// Runs until HALT, feeding every step event to `observer`.
    pub fn run_observed(&mut self, observer: &mut dyn StepObserver) -> Result<(), VmError> {
        while !self.halted {
            let event = self.step()?;
            observer.on_step(&event);
        }
        Ok(())
    }
}

/// Runs a program to completion: buffer in, mutated buffer out.
///
/// The memory image is owned for the duration of the run and returned
/// on a successful halt. On failure the buffer is dropped with the
/// error; by then it holds partially-mutated state that must not be
/// mistaken for valid output.
///
/// # Arguments
///
/// * `memory` - The memory image, program bytes already placed.
/// * `start` - Initial program counter.
pub fn run(memory: Vec<u8>, start: usize) -> Result<Vec<u8>, VmError> {
    let mut machine = Machine::with_start(memory, start);
    machine.run()?;
    Ok(machine.into_memory())
}
