//! CV-X-IF Function Codes (funct7).
//!
//! ALU-class codes select the operation inside custom-3 with funct3 = 1.

/// CUS_NOP (custom-3, funct3 = 0).
pub const CUS_NOP: u32 = 0b0000000;

/// CUS_ADD: `rd = rs1 + rs2`.
pub const CUS_ADD: u32 = 0b0000000;

/// CUS_DOUBLE_RS1: `rd = rs1 + rs1`.
pub const CUS_DOUBLE_RS1: u32 = 0b0000001;

/// CUS_DOUBLE_RS2: `rd = rs2 + rs2`.
pub const CUS_DOUBLE_RS2: u32 = 0b0000010;

/// CUS_ADD_MULTI: `rd = rs1 + rs2` (multi-cycle in hardware).
pub const CUS_ADD_MULTI: u32 = 0b0000011;

/// CUS_ADD_RS3_RTYPE: `a0 = rs1 + rs2 + rs3` (MADD opcode, funct3 = 1).
pub const CUS_ADD_RS3_RTYPE: u32 = 0b0000100;

/// Low bits of funct7 (the R4-type funct2) that must be zero for three-source forms.
pub const R4_FUNCT2_MASK: u32 = 0b11;
