//! Common component tests.

/// Unit tests for trap kinds, cause codes and configuration errors.
pub mod error;
