//! Privileged Architecture Definitions.
//!
//! Defines the trap cause codes the extension can signal, including the
//! hypervisor-extension causes used for virtualized execution.
//!
//! # Modules
//!
//! - `cause`: Exception cause codes.

/// Exception cause code definitions.
pub mod cause;
