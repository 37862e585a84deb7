//! CV-X-IF custom instruction extension library.
//!
//! This crate implements the decode/execute engine for the CORE-V eXtension
//! Interface custom instructions, as plugged into a RISC-V instruction-set
//! simulator:
//! 1. **ISA:** Opcodes, match/mask encodings, bit-field views and a disassembler.
//! 2. **Decode:** An ordered first-match decode table built once from configuration.
//! 3. **Execute:** Operation handlers with structurally classified write-back.
//! 4. **Traps:** Mapping of exception causes to trap signals for the host.
//!
//! The host owns the register file and trap delivery; it plugs in through the
//! [`Hart`] trait.

/// Common types and constants (traps, register file, access types).
pub mod common;
/// Extension configuration.
pub mod config;
/// Decode/execute engine.
pub mod core;
/// Instruction set definitions (encodings, field views, disassembly).
pub mod isa;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Host hart interface.
pub use crate::core::arch::hart::Hart;
/// The extension engine; construct with `Cvxif::new`.
pub use crate::core::Cvxif;
/// Trap signal returned to the host.
pub use crate::common::{Trap, TrapKind};
