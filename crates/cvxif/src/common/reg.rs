//! General-Purpose Register File.
//!
//! This module provides a plain `RegisterFile` that implements the `Hart` host
//! interface. The extension never owns register state; this type stands in for
//! a host core in the CLI and in tests. It provides:
//! 1. **Storage:** 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` is hardwired to zero.
//! 3. **Observability:** A `Display` dump of the register state.

use std::fmt;

use super::constants::NUM_GPRS;
use crate::core::arch::hart::Hart;

/// General-purpose register file with an optional virtualization flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u64; NUM_GPRS],
    virtualized: bool,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register. Register `x0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in 0-31.
    pub fn read(&self, idx: usize) -> u64 {
        debug_assert!(idx < NUM_GPRS, "register index {idx} out of range");
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a general-purpose register. Writes to `x0` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in 0-31.
    pub fn write(&mut self, idx: usize, val: u64) {
        debug_assert!(idx < NUM_GPRS, "register index {idx} out of range");
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Sets the virtualization flag reported to the trap classifier.
    pub fn set_virtualized(&mut self, virtualized: bool) {
        self.virtualized = virtualized;
    }
}

impl Hart for RegisterFile {
    fn read_register(&self, idx: usize) -> u64 {
        self.read(idx)
    }

    fn write_register(&mut self, idx: usize, val: u64) {
        self.write(idx, val);
    }

    fn virtualized(&self) -> bool {
        self.virtualized
    }
}

impl fmt::Display for RegisterFile {
    /// Displays registers in pairs with hexadecimal formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_GPRS).step_by(2) {
            writeln!(
                f,
                "x{:<2}={:#018x} x{:<2}={:#018x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
