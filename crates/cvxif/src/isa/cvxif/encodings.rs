//! CV-X-IF Match/Mask Pairs.
//!
//! A word selects an entry when `word & MASK == MATCH`. Compressed masks cover
//! bits 16-31 so a 16-bit word fetched into a 32-bit slot must have them clear.

/// Mask selecting only the major opcode.
pub const OPCODE_ONLY_MASK: u32 = 0x0000007f;

/// Custom-0 catch-all match.
pub const CUSTOM_0_MATCH: u32 = 0x0000000b;
/// Custom-1 catch-all match.
pub const CUSTOM_1_MATCH: u32 = 0x0000002b;
/// Custom-2 catch-all match.
pub const CUSTOM_2_MATCH: u32 = 0x0000005b;
/// Custom-3 group match.
pub const CUSTOM_3_MATCH: u32 = 0x0000007b;

/// Mask for the R4-type three-source forms: opcode, funct3 and funct2.
pub const ADD_RS3_ADDSUB_MASK: u32 = 0x0600707f;
/// CUS_ADD_RS3_MADD match.
pub const ADD_RS3_MADD_MATCH: u32 = 0x00000043;
/// CUS_ADD_RS3_MSUB match.
pub const ADD_RS3_MSUB_MATCH: u32 = 0x00000047;
/// CUS_ADD_RS3_NMSUB match.
pub const ADD_RS3_NMSUB_MATCH: u32 = 0x0000004b;
/// CUS_ADD_RS3_NMADD match.
pub const ADD_RS3_NMADD_MATCH: u32 = 0x0000004f;

/// Mask for the implicit-destination R-type form: opcode, funct3 and the full funct7.
pub const ADD_RS3_RTYPE_MASK: u32 = 0xfe00707f;
/// CUS_ADD_RS3_RTYPE match (funct7 = 0b0000100, funct3 = 1, opcode = MADD).
pub const ADD_RS3_RTYPE_MATCH: u32 = 0x08001043;

/// Mask for the compressed forms: funct4, quadrant and the unused upper half.
pub const COMPRESSED_MASK: u32 = 0xfffff003;
/// CUS_CNOP match (funct4 = 0b1110, quadrant 0).
pub const CNOP_MATCH: u32 = 0x0000e000;
/// CUS_CADD match (funct4 = 0b1111, quadrant 0).
pub const CADD_MATCH: u32 = 0x0000f000;
