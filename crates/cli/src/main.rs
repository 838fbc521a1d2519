//! Byte machine CLI.
//!
//! This binary is the host adapter around `bytevm-core`. It performs:
//! 1. **Assemble:** Translate a source file into machine bytes (binary or hex listing).
//! 2. **Run:** Build a memory image, seed cells, place a program, execute,
//!    and render the resulting registers and memory as tables or JSON.
//!
//! The memory exchange format is `{"memory": [..]}`: a buffer goes in,
//! the mutated buffer comes out. A partially-mutated buffer from a
//! failed run is never presented as output.

use std::fmt::Write as _;
use std::{fs, process};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use bytevm_core::asm::assemble;
use bytevm_core::core::{StepEvent, StepObserver};
use bytevm_core::isa::disasm::disassemble;
use bytevm_core::sim::loader;
use bytevm_core::{Config, Machine};

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "bytevm",
    author,
    version,
    about = "Minimal byte-code virtual machine",
    long_about = "Assemble programs or run them in a fresh memory image.\n\nExamples:\n  bytevm asm -f prog.bvm -o prog.bin\n  bytevm run -f prog.bvm --poke 1=5 --poke 2=3\n  bytevm run -f prog.bvm --memory image.json --max-steps 10000 --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file into machine bytes.
    Asm {
        /// Assembly source file.
        #[arg(short, long)]
        file: String,

        /// Output path for the raw bytes; omit for a hex listing on stdout.
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Run a program in a memory image and show the result.
    Run {
        /// Assembly source to place at the load offset.
        #[arg(short, long)]
        file: Option<String>,

        /// JSON memory image: an array of bytes or {"memory": [..]}.
        #[arg(long)]
        memory: Option<String>,

        /// Seed a memory cell before running (ADDR=VAL, repeatable).
        #[arg(long, value_name = "ADDR=VAL")]
        poke: Vec<String>,

        /// Stop after this many instructions instead of spinning forever.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Print a disassembled line per executed instruction.
        #[arg(long)]
        trace: bool,

        /// Emit the final image as {"memory": [..]} instead of tables.
        #[arg(long)]
        json: bool,

        /// JSON config file (memory_size, load_offset, step_limit, trace).
        #[arg(long)]
        config: Option<String>,
    },
}

/// JSON exchange envelope: a memory buffer in, the mutated buffer out.
#[derive(Debug, Serialize, Deserialize)]
struct MemoryImage {
    memory: Vec<u8>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Asm { file, out } => cmd_asm(&file, out.as_deref()),
        Commands::Run {
            file,
            memory,
            poke,
            max_steps,
            trace,
            json,
            config,
        } => cmd_run(file, memory, &poke, max_steps, trace, json, config),
    }
}

/// Reads a text file, exiting with an error message on failure.
fn read_text(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: could not read `{path}`: {e}");
        process::exit(1);
    })
}

/// Assembles `file` and writes raw bytes or prints a hex listing.
fn cmd_asm(file: &str, out: Option<&str>) {
    let source = read_text(file);
    let program = assemble(&source).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    match out {
        Some(path) => {
            if let Err(e) = fs::write(path, &program) {
                eprintln!("error: could not write `{path}`: {e}");
                process::exit(1);
            }
            println!("{} bytes -> {path}", program.len());
        }
        None => {
            let mut listing = String::new();
            for byte in &program {
                let _ = write!(listing, "{byte:02x} ");
            }
            println!("{}", listing.trim_end());
        }
    }
}

/// Parses a `--poke ADDR=VAL` argument (decimal or 0x hex on both sides).
fn parse_poke(arg: &str) -> Option<(usize, u8)> {
    let (addr, val) = arg.split_once('=')?;
    let parse = |s: &str| -> Option<usize> {
        s.strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .map_or_else(|| s.parse().ok(), |hex| usize::from_str_radix(hex, 16).ok())
    };
    Some((parse(addr)?, u8::try_from(parse(val)?).ok()?))
}

/// Observer that prints one disassembled line per executed instruction.
struct TracePrinter;

impl StepObserver for TracePrinter {
    fn on_step(&mut self, event: &StepEvent) {
        println!("  {:>5}  {}", event.pc, disassemble(&event.instruction));
    }
}

/// Builds the memory image, runs the program, and renders the outcome.
fn cmd_run(
    file: Option<String>,
    memory: Option<String>,
    pokes: &[String],
    max_steps: Option<u64>,
    trace: bool,
    json: bool,
    config_path: Option<String>,
) {
    let mut config = config_path.map_or_else(Config::default, |path| {
        Config::from_json(&read_text(&path)).unwrap_or_else(|e| {
            eprintln!("error: bad config: {e}");
            process::exit(1);
        })
    });
    if let Some(limit) = max_steps {
        config.step_limit = Some(limit);
    }
    config.trace |= trace;

    let mut image = match memory {
        Some(path) => load_image(&read_text(&path)),
        None => vec![0; config.memory_size],
    };

    for poke in pokes {
        let Some((addr, val)) = parse_poke(poke) else {
            eprintln!("error: bad --poke `{poke}` (expected ADDR=VAL)");
            process::exit(1);
        };
        if addr >= image.len() {
            eprintln!("error: --poke address {addr} outside the {}-byte image", image.len());
            process::exit(1);
        }
        image[addr] = val;
    }

    if let Some(path) = file {
        let source = read_text(&path);
        if let Err(e) = loader::load_source(&mut image, &source, config.load_offset) {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }

    let mut machine = Machine::with_start(image, config.load_offset);
    let mut printer = TracePrinter;

    // The step limit is this host's boundary; the core itself never caps.
    let outcome = run_bounded(&mut machine, config.step_limit, config.trace, &mut printer);

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        process::exit(1);
    }
    if !machine.halted() {
        eprintln!(
            "error: step limit of {} reached without halting",
            config.step_limit.unwrap_or(0)
        );
        process::exit(1);
    }

    if json {
        let envelope = MemoryImage {
            memory: machine.into_memory(),
        };
        match serde_json::to_string(&envelope) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("halted after {} steps", machine.steps());
        println!("\nregisters");
        print!("{}", render::registers(&machine));
        println!("\nmemory");
        print!("{}", render::memory(machine.memory()));
    }
}

/// Runs the machine, honoring an optional step limit and trace flag.
fn run_bounded(
    machine: &mut Machine,
    limit: Option<u64>,
    trace: bool,
    printer: &mut TracePrinter,
) -> Result<(), bytevm_core::VmError> {
    match limit {
        None if trace => machine.run_observed(printer),
        None => machine.run(),
        Some(limit) => {
            let mut executed = 0;
            while !machine.halted() && executed < limit {
                let event = machine.step()?;
                if trace {
                    printer.on_step(&event);
                }
                executed += 1;
            }
            Ok(())
        }
    }
}

/// Parses a JSON memory image: a bare array or {"memory": [..]}.
fn load_image(text: &str) -> Vec<u8> {
    if let Ok(bytes) = serde_json::from_str::<Vec<u8>>(text) {
        return bytes;
    }
    match serde_json::from_str::<MemoryImage>(text) {
        Ok(envelope) => envelope.memory,
        Err(e) => {
            eprintln!("error: bad memory image: {e}");
            process::exit(1);
        }
    }
}
