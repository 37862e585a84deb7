//! Global Constants.
//!
//! Instruction widths and register-width constants shared by the decode table
//! and the operation handlers.

/// Size of a compressed (16-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_16: u64 = 2;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: u64 = 4;

/// Number of general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Value returned by operations whose result is never written back.
pub const UNUSED_RESULT: u64 = u64::MAX;
