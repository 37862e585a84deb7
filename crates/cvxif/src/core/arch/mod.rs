//! Host-facing architectural components.
//!
//! This module contains the pieces that sit on the boundary with the host core:
//! 1. **Hart:** The register and virtualization interface the host implements.
//! 2. **Traps:** Classification of exception causes into trap signals.

/// Host hart interface (register reads/writes, virtualization flag).
pub mod hart;

/// Trap classification.
pub mod trap;
