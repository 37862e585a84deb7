//! Write-back Classification.
//!
//! Decides, from the bit pattern alone, whether executing a custom instruction
//! writes a destination register. Many custom words share their layout with
//! NOP idioms, so the decision is made structurally here instead of inside each
//! handler: handlers always compute a value and the classifier gates the write.
//!
//! Rules, first match wins:
//! 1. Compressed: only quadrant-0 CUS_CADD writes (into `a0`).
//! 2. Custom-3: NOP-class writes iff `rd != 0`; ALU-class writes for the four known funct7 codes.
//! 3. funct3 = 0 and funct2 = 0: the four R4-type three-source opcodes write.
//! 4. MADD opcode, funct3 = 1, funct7 = CUS_ADD_RS3_RTYPE: writes (into `a0`).
//! 5. Anything else does not write.

use crate::isa::cvxif::{funct3, funct4, funct7, opcodes};
use crate::isa::instruction::{CompressedBits, InstructionBits};

/// Returns `true` if executing `word` must write its result to a register.
///
/// Total and side-effect free; safe to call on any 32-bit value.
pub fn requires_writeback(word: u32) -> bool {
    if word.is_compressed() {
        return word.quadrant() == funct4::QUADRANT_C0 && word.c_funct4() == funct4::FUNC4_CADD;
    }

    let opcode = word.opcode();
    let f3 = word.funct3();
    let f7 = word.funct7();

    if opcode == opcodes::OP_CUSTOM_3 {
        return match f3 {
            // CUS_NOP is encoded with rd = x0
            funct3::FUNC3_0 => word.rd() != 0,
            funct3::FUNC3_1 => matches!(
                f7,
                funct7::CUS_ADD
                    | funct7::CUS_DOUBLE_RS1
                    | funct7::CUS_DOUBLE_RS2
                    | funct7::CUS_ADD_MULTI
            ),
            _ => false,
        };
    }

    if f3 == funct3::FUNC3_0 && f7 & funct7::R4_FUNCT2_MASK == 0 {
        return matches!(
            opcode,
            opcodes::OP_ADD_RS3_MADD
                | opcodes::OP_ADD_RS3_MSUB
                | opcodes::OP_ADD_RS3_NMADD
                | opcodes::OP_ADD_RS3_NMSUB
        );
    }

    opcode == opcodes::OP_ADD_RS3_MADD
        && f3 == funct3::FUNC3_1
        && f7 == funct7::CUS_ADD_RS3_RTYPE
}
