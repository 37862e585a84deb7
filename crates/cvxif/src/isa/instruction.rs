//! Instruction field views.
//!
//! The same 32-bit word means different things depending on its opcode class,
//! so there is no canonical decoded struct. Instead, two traits project the raw
//! word into named fields on demand:
//! 1. **`InstructionBits`:** The 32-bit R/R4-type view (opcode, rd, rs1-rs3, funct2/3/7).
//! 2. **`CompressedBits`:** The 16-bit CR-type view (quadrant, funct4, rd/rs1, rs2).

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct2 field (bits 25-26).
pub const FUNCT2_MASK: u32 = 0x3;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the compressed quadrant (bits 0-1).
pub const QUADRANT_MASK: u32 = 0x3;
/// Bit mask for extracting the compressed funct4 field (bits 12-15).
pub const FUNCT4_MASK: u32 = 0xF;

/// Low two bits of every 32-bit (non-compressed) instruction.
pub const NOT_COMPRESSED: u32 = 0b11;

/// Trait for extracting 32-bit instruction fields.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the third source register field (bits 27-31).
    ///
    /// Only meaningful for R4-type words, where it overlaps the top of funct7.
    fn rs3(&self) -> usize;

    /// Extracts the funct2 field (bits 25-26) of an R4-type word.
    fn funct2(&self) -> u32;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Returns `true` if the low two bits mark a 16-bit compressed word.
    fn is_compressed(&self) -> bool;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs3(&self) -> usize {
        ((self >> 27) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct2(&self) -> u32 {
        (self >> 25) & FUNCT2_MASK
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn is_compressed(&self) -> bool {
        self & QUADRANT_MASK != NOT_COMPRESSED
    }
}

/// Trait for extracting CR-type fields from a 16-bit compressed word.
///
/// CR-type layout: `funct4[15:12] | rd/rs1[11:7] | rs2[6:2] | op[1:0]`.
pub trait CompressedBits {
    /// Extracts the quadrant (bits 0-1).
    fn quadrant(&self) -> u32;

    /// Extracts the funct4 field (bits 12-15).
    fn c_funct4(&self) -> u32;

    /// Extracts the combined rd/rs1 register field (bits 7-11).
    fn c_rs1(&self) -> usize;

    /// Extracts the rs2 register field (bits 2-6).
    fn c_rs2(&self) -> usize;
}

impl CompressedBits for u32 {
    #[inline(always)]
    fn quadrant(&self) -> u32 {
        self & QUADRANT_MASK
    }

    #[inline(always)]
    fn c_funct4(&self) -> u32 {
        (self >> 12) & FUNCT4_MASK
    }

    #[inline(always)]
    fn c_rs1(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn c_rs2(&self) -> usize {
        ((self >> 2) & REG_MASK) as usize
    }
}
