//! CV-X-IF Compressed Function Codes (funct4).
//!
//! Both compressed operations live in quadrant 0 and use the CR-type layout.

/// CUS_CNOP: compressed no-op.
pub const FUNC4_CNOP: u32 = 0b1110;

/// CUS_CADD: compressed add, `a0 = rs1 + rs2`.
pub const FUNC4_CADD: u32 = 0b1111;

/// Quadrant holding both compressed operations (bits 1:0 = 00).
pub const QUADRANT_C0: u32 = 0b00;
