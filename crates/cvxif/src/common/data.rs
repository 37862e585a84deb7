//! Memory Access Types.
//!
//! Classifies the access that caused a fault so the host can fill in the
//! access-type tag of the trap it delivers.

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    Fetch,

    /// Data read access (loads).
    Read,

    /// Data write access (stores and AMOs).
    Write,
}
