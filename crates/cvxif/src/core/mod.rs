//! Decode/execute engine.
//!
//! This module contains the CV-X-IF engine and the components it coordinates:
//! the write-back classifier, the decode table, the operation handlers and the
//! host-facing architectural interfaces.

/// Host-facing components (hart interface, trap classification).
pub mod arch;

/// Extension engine (registration, dispatch, fault injection).
pub mod extension;

/// Operation handlers.
pub mod ops;

/// Decode-dispatch table.
pub mod table;

/// Write-back classification.
pub mod writeback;

pub use self::extension::Cvxif;
