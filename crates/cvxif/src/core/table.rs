//! Decode-Dispatch Table.
//!
//! This module builds the ordered list of `(pattern, mask, handler)` entries the
//! extension contributes to the host's dispatch table. It provides:
//! 1. **Entries:** `DecodeEntry`, one generic type parameterized by a compute function.
//! 2. **Factories:** Small constructors per entry family (catch-all, explicit rd, implicit a0, compressed).
//! 3. **Lookup:** First-match scan in registration order.
//!
//! Catch-all entries only cover custom-0/1/2, which no narrower entry competes
//! with. Every other family has its own disjoint match/mask pair.

use tracing::trace;

use crate::common::constants::{INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32};
use crate::common::error::Trap;
use crate::config::{ExtensionConfig, Xlen};
use crate::core::arch::hart::Hart;
use crate::core::ops::{self, ComputeFn};
use crate::core::writeback::requires_writeback;
use crate::isa::abi::REG_A0;
use crate::isa::cvxif::encodings as enc;
use crate::isa::instruction::InstructionBits;

/// Identifies the operation a decode entry dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationId {
    /// Any custom-0 word (illegal).
    Custom0,
    /// Any custom-1 word (illegal).
    Custom1,
    /// Any custom-2 word (illegal).
    Custom2,
    /// The custom-3 group (CUS_NOP and the ALU-class operations).
    Custom3,
    /// CUS_ADD_RS3_MADD.
    AddRs3Madd,
    /// CUS_ADD_RS3_MSUB.
    AddRs3Msub,
    /// CUS_ADD_RS3_NMADD.
    AddRs3Nmadd,
    /// CUS_ADD_RS3_NMSUB.
    AddRs3Nmsub,
    /// CUS_ADD_RS3_RTYPE.
    AddRs3Rtype,
    /// CUS_CNOP.
    CNop,
    /// CUS_CADD.
    CAdd,
}

/// Encoding width of an entry; fixes the PC advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsnWidth {
    /// 16-bit compressed encoding.
    Compressed,
    /// 32-bit encoding.
    Full,
}

impl InsnWidth {
    /// Returns the PC advance in bytes.
    pub const fn bytes(self) -> u64 {
        match self {
            Self::Compressed => INSTRUCTION_SIZE_16,
            Self::Full => INSTRUCTION_SIZE_32,
        }
    }
}

/// Where an entry writes its result when the classifier requests write-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// The rd field encoded in the word.
    Rd,
    /// Register x10 regardless of the encoding.
    A0,
    /// The operation never writes.
    None,
}

impl Destination {
    /// Resolves the destination register for `word`.
    pub fn resolve(self, word: u32) -> Option<usize> {
        match self {
            Self::Rd => Some(word.rd()),
            Self::A0 => Some(REG_A0),
            Self::None => None,
        }
    }
}

/// Outcome of evaluating an entry without touching the register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationResult {
    /// Computed value, sign-extended to the register width.
    pub value: u64,
    /// Program counter of the next instruction.
    pub new_pc: u64,
    /// Whether the classifier requests a register write.
    pub writeback: bool,
    /// Register the write targets, if the operation has one.
    pub rd: Option<usize>,
}

/// A single decode table entry.
///
/// A word selects the entry when `word & mask == pattern`.
#[derive(Clone, Copy, Debug)]
pub struct DecodeEntry {
    /// Assembler mnemonic, used for logging and listings.
    pub name: &'static str,
    /// Bits that must be set under `mask`.
    pub pattern: u32,
    /// Bits compared against `pattern`.
    pub mask: u32,
    /// Operation dispatched to.
    pub id: OperationId,
    /// Encoding width.
    pub width: InsnWidth,
    /// Write-back target.
    pub destination: Destination,
    catch_all: bool,
    xlen: Xlen,
    compute: ComputeFn,
}

impl DecodeEntry {
    /// Catch-all entry for a whole custom opcode whose words are all illegal.
    pub const fn illegal(name: &'static str, id: OperationId, pattern: u32, xlen: Xlen) -> Self {
        Self {
            name,
            pattern,
            mask: enc::OPCODE_ONLY_MASK,
            id,
            width: InsnWidth::Full,
            destination: Destination::None,
            catch_all: true,
            xlen,
            compute: ops::custom_illegal,
        }
    }

    /// 32-bit entry writing the encoded rd.
    pub const fn explicit_rd(
        name: &'static str,
        id: OperationId,
        pattern: u32,
        mask: u32,
        compute: ComputeFn,
        xlen: Xlen,
    ) -> Self {
        Self {
            name,
            pattern,
            mask,
            id,
            width: InsnWidth::Full,
            destination: Destination::Rd,
            catch_all: false,
            xlen,
            compute,
        }
    }

    /// 32-bit entry writing `a0`.
    pub const fn implicit_a0(
        name: &'static str,
        id: OperationId,
        pattern: u32,
        mask: u32,
        compute: ComputeFn,
        xlen: Xlen,
    ) -> Self {
        Self {
            destination: Destination::A0,
            ..Self::explicit_rd(name, id, pattern, mask, compute, xlen)
        }
    }

    /// 16-bit entry with the given destination.
    pub const fn compressed(
        name: &'static str,
        id: OperationId,
        pattern: u32,
        compute: ComputeFn,
        destination: Destination,
        xlen: Xlen,
    ) -> Self {
        Self {
            name,
            pattern,
            mask: enc::COMPRESSED_MASK,
            id,
            width: InsnWidth::Compressed,
            destination,
            catch_all: false,
            xlen,
            compute,
        }
    }

    /// Returns `true` if `word` selects this entry.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.pattern
    }

    /// Returns `true` for entries that claim a whole opcode as illegal.
    pub const fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    /// Computes the result of `word` at `pc` without writing any register.
    ///
    /// # Errors
    ///
    /// Returns the trap raised by the operation (illegal instruction for
    /// undefined encodings).
    pub fn evaluate(&self, word: u32, pc: u64, hart: &dyn Hart) -> Result<OperationResult, Trap> {
        let value = self.xlen.sext((self.compute)(word, hart)?);
        Ok(OperationResult {
            value,
            new_pc: pc.wrapping_add(self.width.bytes()),
            writeback: requires_writeback(word),
            rd: self.destination.resolve(word),
        })
    }

    /// Executes `word` at `pc`: read, compute, classify, write, return the next PC.
    ///
    /// # Errors
    ///
    /// Returns the trap raised by the operation; no register is written then.
    pub fn execute(&self, word: u32, pc: u64, hart: &mut dyn Hart) -> Result<u64, Trap> {
        let result = self.evaluate(word, pc, &*hart)?;
        let target = result.rd.filter(|_| result.writeback);
        if let Some(rd) = target {
            hart.write_register(rd, result.value);
        }
        trace!(
            pc,
            word,
            op = self.name,
            value = result.value,
            rd = ?target,
            "cvxif execute"
        );
        Ok(result.new_pc)
    }
}

/// The ordered decode table of the extension.
#[derive(Clone, Debug)]
pub struct DecodeTable {
    entries: Vec<DecodeEntry>,
}

impl DecodeTable {
    /// Builds the table for the given extension configuration.
    ///
    /// Registration order: custom-0/1/2 catch-alls, custom-3, the R4-type
    /// three-source forms, the implicit-destination R-type form, then the
    /// compressed forms.
    pub fn build(config: &ExtensionConfig) -> Self {
        let xlen = config.xlen;
        let mut entries = vec![
            DecodeEntry::illegal("custom0", OperationId::Custom0, enc::CUSTOM_0_MATCH, xlen),
            DecodeEntry::illegal("custom1", OperationId::Custom1, enc::CUSTOM_1_MATCH, xlen),
            DecodeEntry::illegal("custom2", OperationId::Custom2, enc::CUSTOM_2_MATCH, xlen),
            DecodeEntry::explicit_rd(
                "custom3",
                OperationId::Custom3,
                enc::CUSTOM_3_MATCH,
                enc::OPCODE_ONLY_MASK,
                ops::custom3,
                xlen,
            ),
        ];

        if config.rs3_ops {
            entries.extend([
                DecodeEntry::explicit_rd(
                    "cus_add_rs3_madd",
                    OperationId::AddRs3Madd,
                    enc::ADD_RS3_MADD_MATCH,
                    enc::ADD_RS3_ADDSUB_MASK,
                    ops::add_rs3_madd,
                    xlen,
                ),
                DecodeEntry::explicit_rd(
                    "cus_add_rs3_msub",
                    OperationId::AddRs3Msub,
                    enc::ADD_RS3_MSUB_MATCH,
                    enc::ADD_RS3_ADDSUB_MASK,
                    ops::add_rs3_msub,
                    xlen,
                ),
                DecodeEntry::explicit_rd(
                    "cus_add_rs3_nmadd",
                    OperationId::AddRs3Nmadd,
                    enc::ADD_RS3_NMADD_MATCH,
                    enc::ADD_RS3_ADDSUB_MASK,
                    ops::add_rs3_nmadd,
                    xlen,
                ),
                DecodeEntry::explicit_rd(
                    "cus_add_rs3_nmsub",
                    OperationId::AddRs3Nmsub,
                    enc::ADD_RS3_NMSUB_MATCH,
                    enc::ADD_RS3_ADDSUB_MASK,
                    ops::add_rs3_nmsub,
                    xlen,
                ),
                DecodeEntry::implicit_a0(
                    "cus_add_rs3_rtype",
                    OperationId::AddRs3Rtype,
                    enc::ADD_RS3_RTYPE_MATCH,
                    enc::ADD_RS3_RTYPE_MASK,
                    ops::add_rs3_rtype,
                    xlen,
                ),
            ]);
        }

        if config.compressed {
            entries.extend([
                DecodeEntry::compressed(
                    "cus_cnop",
                    OperationId::CNop,
                    enc::CNOP_MATCH,
                    ops::cnop,
                    Destination::None,
                    xlen,
                ),
                DecodeEntry::compressed(
                    "cus_cadd",
                    OperationId::CAdd,
                    enc::CADD_MATCH,
                    ops::cadd,
                    Destination::A0,
                    xlen,
                ),
            ]);
        }

        Self { entries }
    }

    /// Returns the entries in registration order.
    pub fn entries(&self) -> &[DecodeEntry] {
        &self.entries
    }

    /// Returns the first entry selected by `word`, if any.
    pub fn lookup(&self, word: u32) -> Option<&DecodeEntry> {
        self.entries.iter().find(|entry| entry.matches(word))
    }

    /// Returns the registration index of the first entry selected by `word`.
    pub fn position(&self, word: u32) -> Option<usize> {
        self.entries.iter().position(|entry| entry.matches(word))
    }

    /// Returns the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
