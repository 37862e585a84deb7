//! Host Hart Interface.
//!
//! The narrow interface through which the extension touches host state. The
//! host core owns its register file; the extension only asks for operand reads
//! and result writes, and reads the virtualization flag when classifying traps.

/// A host hardware thread as seen by the extension.
///
/// Register indices are always in 0-31. Hosts must keep `x0` hardwired to zero.
pub trait Hart {
    /// Reads an integer register.
    fn read_register(&self, idx: usize) -> u64;

    /// Writes an integer register.
    fn write_register(&mut self, idx: usize, val: u64);

    /// Returns `true` while the hart executes in a virtualized (VS/VU) mode.
    fn virtualized(&self) -> bool {
        false
    }
}
