//! CV-X-IF decode/execute CLI.
//!
//! This binary drives the extension engine outside of a host simulator. It performs:
//! 1. **Table listing:** Print the registered decode entries in lookup order.
//! 2. **Decode:** Show which entry a word selects, its write-back decision and disassembly.
//! 3. **Execute:** Run one word against a scratch register file and print the outcome.
//!
//! Logging goes to stderr through `tracing-subscriber`; set `RUST_LOG=debug`
//! (or `trace`) to see table construction and per-instruction events.

use clap::{Parser, Subcommand};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use cvxif_core::common::RegisterFile;
use cvxif_core::config::{Config, Xlen};
use cvxif_core::core::writeback::requires_writeback;
use cvxif_core::isa::abi::xreg;
use cvxif_core::isa::disasm::disassemble;
use cvxif_core::{Cvxif, Hart};

#[derive(Parser, Debug)]
#[command(
    name = "cvxif",
    author,
    version,
    about = "CV-X-IF custom instruction decoder and executor",
    long_about = "Inspect and execute CORE-V eXtension Interface custom instructions.\n\nWords may be given in hex (0x prefix) or decimal.\n\nExamples:\n  cvxif table\n  cvxif decode 0x0062957b\n  cvxif exec 0x0062957b --reg 5=5 --reg 6=3\n  cvxif exec 0xf194 --pc 0x80000000 --reg 3=5 --reg 5=3"
)]
struct Cli {
    /// JSON configuration file; defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Override the register width (32 or 64).
    #[arg(long, global = true)]
    xlen: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered decode entries in lookup order.
    Table,

    /// Decode a single instruction word.
    Decode {
        /// Instruction word (compressed words in the low 16 bits).
        word: String,
    },

    /// Execute a single instruction word against a zeroed register file.
    Exec {
        /// Instruction word (compressed words in the low 16 bits).
        word: String,

        /// Program counter of the instruction.
        #[arg(long, default_value = "0")]
        pc: String,

        /// Initial register value as `N=V` (repeatable).
        #[arg(short, long = "reg", value_name = "N=V")]
        regs: Vec<String>,
    },
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.xlen).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    let engine = Cvxif::new(config);

    let result = match cli.command {
        Commands::Table => {
            cmd_table(&engine);
            Ok(())
        }
        Commands::Decode { word } => cmd_decode(&engine, &word),
        Commands::Exec { word, pc, regs } => cmd_exec(&engine, &word, &pc, &regs),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Builds the configuration from an optional JSON file and an optional XLEN override.
fn load_config(path: Option<&str>, xlen: Option<u32>) -> Result<Config, String> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
            Config::from_json(&text).map_err(|e| format!("{path}: {e}"))?
        }
        None => Config::default(),
    };
    if let Some(bits) = xlen {
        config.extension.xlen = Xlen::try_from(bits).map_err(|e| e.to_string())?;
    }
    Ok(config)
}

/// Parses a number in hex (`0x` prefix) or decimal.
fn parse_u64(text: &str) -> Result<u64, String> {
    let text = text.trim().replace('_', "");
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{text}': {e}"))
}

fn parse_word(text: &str) -> Result<u32, String> {
    let value = parse_u64(text)?;
    u32::try_from(value).map_err(|_| format!("instruction word '{text}' exceeds 32 bits"))
}

/// Parses an `N=V` register assignment.
fn parse_reg(text: &str) -> Result<(usize, u64), String> {
    let (idx, val) = text
        .split_once('=')
        .ok_or_else(|| format!("register assignment '{text}' is not N=V"))?;
    let idx = idx
        .trim()
        .trim_start_matches('x')
        .parse::<usize>()
        .map_err(|e| format!("invalid register index in '{text}': {e}"))?;
    if idx >= 32 {
        return Err(format!("register index {idx} out of range 0-31"));
    }
    Ok((idx, parse_u64(val)?))
}

fn cmd_table(engine: &Cvxif) {
    println!("{:<4} {:<20} {:>10} {:>10}  width  dest", "#", "name", "match", "mask");
    for (i, entry) in engine.register_operations().iter().enumerate() {
        println!(
            "{:<4} {:<20} {:#010x} {:#010x}  {:<5}  {:?}",
            i,
            entry.name,
            entry.pattern,
            entry.mask,
            entry.width.bytes(),
            entry.destination
        );
    }
}

fn cmd_decode(engine: &Cvxif, word: &str) -> Result<(), String> {
    let word = parse_word(word)?;
    let Some(entry) = engine.lookup(word) else {
        println!("{word:#010x}: no entry (illegal instruction)");
        return Ok(());
    };
    let rd = entry.destination.resolve(word);
    println!("word:        {word:#010x}");
    println!("entry:       {}", entry.name);
    println!("disassembly: {}", disassemble(word));
    println!("writeback:   {}", requires_writeback(word));
    println!("destination: {}", rd.map_or("-", xreg));
    Ok(())
}

fn cmd_exec(engine: &Cvxif, word: &str, pc: &str, regs: &[String]) -> Result<(), String> {
    let word = parse_word(word)?;
    let pc = parse_u64(pc)?;

    let mut hart = RegisterFile::new();
    for assignment in regs {
        let (idx, val) = parse_reg(assignment)?;
        hart.write(idx, val);
    }
    let before = hart.clone();

    let new_pc = engine
        .step(word, pc, &mut hart)
        .map_err(|trap| format!("trap: {trap} (cause {})", trap.cause()))?;

    println!("{pc:#018x}: {word:#010x} {}", disassemble(word));
    println!("next pc: {new_pc:#018x}");
    for idx in 0..32 {
        let val = hart.read_register(idx);
        if val != before.read_register(idx) {
            println!("{} <- {val:#018x}", xreg(idx));
        }
    }
    Ok(())
}
