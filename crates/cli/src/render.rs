//! Table rendering for memory images and register cells.
//!
//! The core exposes bytes and events; turning them into something a
//! person can read is this host's job. Output mirrors the classic
//! front-end view: a register table (PC, R1, R2) and a hex dump of the
//! full memory image.

use std::fmt::Write as _;

use bytevm_core::isa::abi;
use bytevm_core::Machine;

/// Bytes shown per hex-dump row.
const ROW_WIDTH: usize = 16;

/// Renders the register table: PC plus the register-aliased cells.
pub fn registers(machine: &Machine) -> String {
    let mem = machine.memory();
    let cell = |addr: u8| mem.get(addr as usize).copied().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "  PC  {:#04x}  ({})", machine.pc(), machine.pc());
    let _ = writeln!(out, "  R1  {:#04x}  (cell {})", cell(abi::REG_R1), abi::REG_R1);
    let _ = writeln!(out, "  R2  {:#04x}  (cell {})", cell(abi::REG_R2), abi::REG_R2);
    out
}

/// Renders the memory image as a hex dump, 16 bytes per row.
pub fn memory(mem: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in mem.chunks(ROW_WIDTH).enumerate() {
        let _ = write!(out, "  {:#06x} |", row * ROW_WIDTH);
        for byte in chunk {
            let _ = write!(out, " {byte:02x}");
        }
        out.push('\n');
    }
    out
}
