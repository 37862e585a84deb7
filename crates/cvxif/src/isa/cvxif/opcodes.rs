//! CV-X-IF Major Opcodes.
//!
//! The custom-N opcodes are reserved by the base ISA for vendor extensions.
//! The R4-type opcodes are shared with the F/D fused multiply-add family.

/// Custom-0 (reserved, illegal in this extension).
pub const OP_CUSTOM_0: u32 = 0b0001011;

/// Custom-1 (reserved, illegal in this extension).
pub const OP_CUSTOM_1: u32 = 0b0101011;

/// Custom-2 (reserved, illegal in this extension).
pub const OP_CUSTOM_2: u32 = 0b1011011;

/// Custom-3 (CUS_NOP and the ALU-class operations).
pub const OP_CUSTOM_3: u32 = 0b1111011;

/// Three-source add in the MADD slot, also the implicit-destination R-type form.
pub const OP_ADD_RS3_MADD: u32 = 0b1000011;

/// Three-source subtract in the MSUB slot.
pub const OP_ADD_RS3_MSUB: u32 = 0b1000111;

/// Negated three-source subtract in the NMSUB slot.
pub const OP_ADD_RS3_NMSUB: u32 = 0b1001011;

/// Negated three-source add in the NMADD slot.
pub const OP_ADD_RS3_NMADD: u32 = 0b1001111;
