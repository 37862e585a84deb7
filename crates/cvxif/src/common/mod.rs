//! Common utilities and types shared across the extension.
//!
//! This module provides:
//! 1. **Constants:** Instruction widths and register-file dimensions.
//! 2. **Memory Access:** Access-type tags attached to memory-related traps.
//! 3. **Error Handling:** Trap and configuration error types.
//! 4. **Register Management:** A plain register file that implements the host interface.

/// Common constants used throughout the extension.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32};
pub use data::AccessType;
pub use error::{ConfigError, Trap, TrapKind};
pub use reg::RegisterFile;
