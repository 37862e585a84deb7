//! Instruction Disassembler for CV-X-IF.
//!
//! Converts a custom instruction word into a human-readable mnemonic string
//! for debug tracing, the CLI, and test diagnostics. Words outside the
//! extension's defined encodings render as `"unknown"`.
//!
//! # Usage
//!
//! ```
//! use cvxif_core::isa::disasm::disassemble;
//! // cus_add a0, t0, t1
//! assert_eq!(disassemble(0x0062_957b), "cus_add a0, t0, t1");
//! ```

use crate::core::ops::Custom3Op;
use crate::isa::abi::xreg;
use crate::isa::cvxif::encodings as enc;
use crate::isa::instruction::{CompressedBits, InstructionBits};

/// Disassembles a CV-X-IF instruction word.
///
/// # Arguments
///
/// * `inst` - The raw instruction; compressed words in the low 16 bits.
pub fn disassemble(inst: u32) -> String {
    let matches = |pattern: u32, mask: u32| inst & mask == pattern;

    if matches(enc::CUSTOM_3_MATCH, enc::OPCODE_ONLY_MASK) {
        return match Custom3Op::decode(inst) {
            Some(Custom3Op::Nop) if inst.rd() == 0 => Custom3Op::Nop.mnemonic().to_string(),
            Some(Custom3Op::Nop) => format!("{} {}", Custom3Op::Nop.mnemonic(), xreg(inst.rd())),
            Some(op @ Custom3Op::DoubleRs1) => {
                format!("{} {}, {}", op.mnemonic(), xreg(inst.rd()), xreg(inst.rs1()))
            }
            Some(op @ Custom3Op::DoubleRs2) => {
                format!("{} {}, {}", op.mnemonic(), xreg(inst.rd()), xreg(inst.rs2()))
            }
            Some(op) => format!(
                "{} {}, {}, {}",
                op.mnemonic(),
                xreg(inst.rd()),
                xreg(inst.rs1()),
                xreg(inst.rs2())
            ),
            None => "unknown".to_string(),
        };
    }

    let r4 = [
        (enc::ADD_RS3_MADD_MATCH, "cus_add_rs3_madd"),
        (enc::ADD_RS3_MSUB_MATCH, "cus_add_rs3_msub"),
        (enc::ADD_RS3_NMADD_MATCH, "cus_add_rs3_nmadd"),
        (enc::ADD_RS3_NMSUB_MATCH, "cus_add_rs3_nmsub"),
    ];
    if let Some((_, name)) = r4
        .iter()
        .find(|(pattern, _)| matches(*pattern, enc::ADD_RS3_ADDSUB_MASK))
    {
        return format!(
            "{name} {}, {}, {}, {}",
            xreg(inst.rd()),
            xreg(inst.rs1()),
            xreg(inst.rs2()),
            xreg(inst.rs3())
        );
    }

    if matches(enc::ADD_RS3_RTYPE_MATCH, enc::ADD_RS3_RTYPE_MASK) {
        // rd is implicitly a0
        return format!(
            "cus_add_rs3_rtype {}, {}, {}",
            xreg(inst.rs1()),
            xreg(inst.rs2()),
            xreg(inst.rs3())
        );
    }

    if matches(enc::CNOP_MATCH, enc::COMPRESSED_MASK) {
        return "cus_cnop".to_string();
    }

    if matches(enc::CADD_MATCH, enc::COMPRESSED_MASK) {
        return format!("cus_cadd {}, {}", xreg(inst.c_rs1()), xreg(inst.c_rs2()));
    }

    "unknown".to_string()
}
