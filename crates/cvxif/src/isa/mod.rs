//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encodings claimed by the CV-X-IF extension, the field views used
//! to pick instruction words apart, and the trap cause codes it can signal.
//!
//! # Modules
//!
//! * `cvxif`: Opcodes, function codes, and match/mask pairs of the extension.
//! * `instruction`: 32-bit and compressed bit-field views.
//! * `privileged`: Trap cause codes.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// CV-X-IF opcodes, function codes, and decode table encodings.
pub mod cvxif;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction bit-field views.
pub mod instruction;

/// Privileged architecture definitions (trap causes).
pub mod privileged;
