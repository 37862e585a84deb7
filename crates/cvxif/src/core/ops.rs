//! Operation Handlers.
//!
//! Implements the computation of every CV-X-IF operation. Each handler reads
//! only the source registers its operation needs, computes a 64-bit result with
//! wrapping two's-complement arithmetic, and never writes: write-back is done by
//! the decode entry once the classifier agrees.
//!
//! All handlers share the `ComputeFn` signature so a decode entry can hold any
//! of them as a plain function pointer.

use crate::common::constants::UNUSED_RESULT;
use crate::common::error::Trap;
use crate::core::arch::hart::Hart;
use crate::core::arch::trap::TrapHandler;
use crate::isa::cvxif::{funct3, funct7};
use crate::isa::instruction::{CompressedBits, InstructionBits};

/// Signature shared by all operation handlers.
///
/// Receives the raw instruction word and read access to the host registers.
/// Returns the computed value or the trap that aborts the instruction.
pub type ComputeFn = fn(u32, &dyn Hart) -> Result<u64, Trap>;

/// Sub-operations of the custom-3 opcode group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Custom3Op {
    /// CUS_NOP (funct3 = 0, funct7 = 0).
    Nop,
    /// CUS_ADD: `rs1 + rs2`.
    Add,
    /// CUS_DOUBLE_RS1: `rs1 + rs1`.
    DoubleRs1,
    /// CUS_DOUBLE_RS2: `rs2 + rs2`.
    DoubleRs2,
    /// CUS_ADD_MULTI: `rs1 + rs2`.
    AddMulti,
}

impl Custom3Op {
    /// Decodes the custom-3 sub-operation selected by funct3/funct7.
    ///
    /// NOP-class and ALU-class are disjoint groups. Returns `None` for any
    /// combination the extension does not define.
    pub fn decode(word: u32) -> Option<Self> {
        match (word.funct3(), word.funct7()) {
            (funct3::FUNC3_0, funct7::CUS_NOP) => Some(Self::Nop),
            (funct3::FUNC3_1, funct7::CUS_ADD) => Some(Self::Add),
            (funct3::FUNC3_1, funct7::CUS_DOUBLE_RS1) => Some(Self::DoubleRs1),
            (funct3::FUNC3_1, funct7::CUS_DOUBLE_RS2) => Some(Self::DoubleRs2),
            (funct3::FUNC3_1, funct7::CUS_ADD_MULTI) => Some(Self::AddMulti),
            _ => None,
        }
    }

    /// Returns the assembler mnemonic of the sub-operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "cus_nop",
            Self::Add => "cus_add",
            Self::DoubleRs1 => "cus_double_rs1",
            Self::DoubleRs2 => "cus_double_rs2",
            Self::AddMulti => "cus_add_multi",
        }
    }
}

/// Handler for custom-0/1/2 words: always illegal.
pub fn custom_illegal(word: u32, _hart: &dyn Hart) -> Result<u64, Trap> {
    Err(TrapHandler::illegal_instruction(word))
}

/// Handler for the custom-3 group.
///
/// # Errors
///
/// Returns an illegal-instruction trap for any funct3/funct7 combination that
/// `Custom3Op::decode` rejects.
pub fn custom3(word: u32, hart: &dyn Hart) -> Result<u64, Trap> {
    let op = Custom3Op::decode(word).ok_or_else(|| TrapHandler::illegal_instruction(word))?;
    let value = match op {
        // NOP-class does not fall through to the ALU group: it yields zero,
        // which the classifier writes back only when rd != x0.
        Custom3Op::Nop => 0,
        Custom3Op::Add | Custom3Op::AddMulti => hart
            .read_register(word.rs1())
            .wrapping_add(hart.read_register(word.rs2())),
        Custom3Op::DoubleRs1 => {
            let rs1 = hart.read_register(word.rs1());
            rs1.wrapping_add(rs1)
        }
        Custom3Op::DoubleRs2 => {
            let rs2 = hart.read_register(word.rs2());
            rs2.wrapping_add(rs2)
        }
    };
    Ok(value)
}

#[inline]
fn three_sources(word: u32, hart: &dyn Hart) -> (u64, u64, u64) {
    (
        hart.read_register(word.rs1()),
        hart.read_register(word.rs2()),
        hart.read_register(word.rs3()),
    )
}

/// CUS_ADD_RS3_MADD: `rs1 + rs2 + rs3`.
pub fn add_rs3_madd(word: u32, hart: &dyn Hart) -> Result<u64, Trap> {
    let (a, b, c) = three_sources(word, hart);
    Ok(a.wrapping_add(b).wrapping_add(c))
}

/// CUS_ADD_RS3_MSUB: `rs1 - rs2 - rs3`.
pub fn add_rs3_msub(word: u32, hart: &dyn Hart) -> Result<u64, Trap> {
    let (a, b, c) = three_sources(word, hart);
    Ok(a.wrapping_sub(b).wrapping_sub(c))
}

/// CUS_ADD_RS3_NMADD: `!(rs1 + rs2 + rs3)`.
pub fn add_rs3_nmadd(word: u32, hart: &dyn Hart) -> Result<u64, Trap> {
    let (a, b, c) = three_sources(word, hart);
    Ok(!a.wrapping_add(b).wrapping_add(c))
}

/// CUS_ADD_RS3_NMSUB: `!(rs1 - rs2 - rs3)`.
pub fn add_rs3_nmsub(word: u32, hart: &dyn Hart) -> Result<u64, Trap> {
    let (a, b, c) = three_sources(word, hart);
    Ok(!a.wrapping_sub(b).wrapping_sub(c))
}

/// CUS_ADD_RS3_RTYPE: `rs1 + rs2 + rs3`, destination implicitly `a0`.
pub fn add_rs3_rtype(word: u32, hart: &dyn Hart) -> Result<u64, Trap> {
    add_rs3_madd(word, hart)
}

/// CUS_CNOP: no computation; the all-ones value is never written.
pub fn cnop(_word: u32, _hart: &dyn Hart) -> Result<u64, Trap> {
    Ok(UNUSED_RESULT)
}

/// CUS_CADD: `rs1 + rs2` using the CR-type register fields.
pub fn cadd(word: u32, hart: &dyn Hart) -> Result<u64, Trap> {
    Ok(hart
        .read_register(word.c_rs1())
        .wrapping_add(hart.read_register(word.c_rs2())))
}
