//! CV-X-IF Extension Engine.
//!
//! This module ties the decode table, handlers and trap classifier together.
//! It performs the following:
//! 1. **Registration:** Builds the decode table once from an explicit `Config`.
//! 2. **Dispatch:** Looks up a fetched word and runs the selected entry.
//! 3. **Fault Injection:** Classifies host-requested exception causes into traps.
//! 4. **Observability:** Optional per-instruction tracing with disassembly.
//!
//! The engine holds no mutable state after construction and can be shared
//! between harts.

use tracing::{debug, info};

use crate::common::error::Trap;
use crate::config::Config;
use crate::core::arch::hart::Hart;
use crate::core::arch::trap::{TrapContext, TrapHandler};
use crate::core::table::{DecodeEntry, DecodeTable};
use crate::isa::disasm::disassemble;

/// Name under which the extension registers with its host.
pub const EXTENSION_NAME: &str = "cvxif";

/// The CV-X-IF custom instruction engine.
#[derive(Clone, Debug)]
pub struct Cvxif {
    config: Config,
    table: DecodeTable,
}

impl Cvxif {
    /// Creates the engine and builds its decode table.
    pub fn new(config: Config) -> Self {
        let table = DecodeTable::build(&config.extension);
        debug!(
            entries = table.len(),
            xlen = config.extension.xlen.bits(),
            compressed = config.extension.compressed,
            rs3_ops = config.extension.rs3_ops,
            "cvxif decode table built"
        );
        Self { config, table }
    }

    /// Returns the extension name.
    pub const fn name(&self) -> &'static str {
        EXTENSION_NAME
    }

    /// Returns the configuration the engine was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the decode entries to merge into the host's dispatch table.
    pub fn register_operations(&self) -> &[DecodeEntry] {
        self.table.entries()
    }

    /// Returns the decode table.
    pub const fn table(&self) -> &DecodeTable {
        &self.table
    }

    /// Returns the entry selected by `word`, or `None` on a decode miss.
    pub fn lookup(&self, word: u32) -> Option<&DecodeEntry> {
        self.table.lookup(word)
    }

    /// Looks up and executes one fetched word.
    ///
    /// # Arguments
    ///
    /// * `word` - The fetched instruction (compressed words in the low 16 bits).
    /// * `pc` - Address of the instruction.
    /// * `hart` - The host hart whose registers are read and written.
    ///
    /// # Returns
    ///
    /// The program counter of the next instruction.
    ///
    /// # Errors
    ///
    /// Returns an illegal-instruction trap on a decode miss, mirroring the
    /// host's default path, or the trap raised by the selected operation.
    pub fn step(&self, word: u32, pc: u64, hart: &mut dyn Hart) -> Result<u64, Trap> {
        let Some(entry) = self.table.lookup(word) else {
            debug!(pc, word, "cvxif decode miss");
            return Err(TrapHandler::illegal_instruction(word));
        };
        if self.config.general.trace_instructions {
            info!("{pc:#018x}: {word:#010x} {}", disassemble(word));
        }
        entry.execute(word, pc, hart)
    }

    /// Classifies a host-requested exception for the instruction `word`.
    ///
    /// The returned trap is terminal; the host delivers it instead of retiring `word`.
    pub fn raise_exception(&self, word: u32, cause: u64, hart: &dyn Hart) -> Trap {
        TrapHandler::raise(cause, TrapContext::new(word, hart.virtualized()))
    }
}

impl Default for Cvxif {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
