//! # Unit Components
//!
//! This module organizes the unit tests of the extension by component:
//! shared types, the decode/execute core, ISA helpers and configuration.

/// Unit tests for traps, errors and the register file.
pub mod common;

/// Unit tests for configuration defaults and JSON loading.
pub mod config;


/// Unit tests for bit-field views and the disassembler.
pub mod isa;
