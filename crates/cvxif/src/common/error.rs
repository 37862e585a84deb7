//! Trap and Configuration Error definitions.
//!
//! This module defines the error values the extension hands back to its host. It provides:
//! 1. **Trap Kinds:** Every synchronous exception the extension can signal, tied to its cause code.
//! 2. **Trap Signal:** The kind plus the context the host needs to deliver it.
//! 3. **Configuration Errors:** Failures while parsing or validating a `Config`.
//!
//! A `Trap` is always terminal for the instruction that produced it: handlers
//! return it as `Err` and the host's step loop decides what happens next.

use std::fmt;

use thiserror::Error;

use super::data::AccessType;
use crate::isa::privileged::cause::exception;

/// Synchronous exception kinds the extension can signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrapKind {
    /// Instruction address misaligned.
    InstructionAddressMisaligned,
    /// Instruction access fault.
    InstructionAccessFault,
    /// Illegal instruction; raised for undecodable words in the custom space.
    IllegalInstruction,
    /// Breakpoint.
    Breakpoint,
    /// Load address misaligned.
    LoadAddressMisaligned,
    /// Load access fault.
    LoadAccessFault,
    /// Store/AMO address misaligned.
    StoreAddressMisaligned,
    /// Store/AMO access fault.
    StoreAccessFault,
    /// Environment call from U-mode.
    EnvironmentCallFromUMode,
    /// Environment call from S-mode.
    EnvironmentCallFromSMode,
    /// Environment call from VS-mode.
    EnvironmentCallFromVSMode,
    /// Environment call from M-mode.
    EnvironmentCallFromMMode,
    /// Instruction page fault.
    InstructionPageFault,
    /// Load page fault.
    LoadPageFault,
    /// Store/AMO page fault.
    StorePageFault,
    /// Instruction guest-page fault.
    InstructionGuestPageFault,
    /// Load guest-page fault.
    LoadGuestPageFault,
    /// Virtual instruction.
    VirtualInstruction,
    /// Store/AMO guest-page fault.
    StoreGuestPageFault,
    /// Cause code with no defined mapping; carries the raw code.
    UnknownInstruction(u64),
}

impl TrapKind {
    /// Returns the `mcause` exception code for this kind.
    ///
    /// `UnknownInstruction` returns the raw code it was built from.
    pub const fn cause(self) -> u64 {
        match self {
            Self::InstructionAddressMisaligned => exception::INSTRUCTION_ADDRESS_MISALIGNED,
            Self::InstructionAccessFault => exception::INSTRUCTION_ACCESS_FAULT,
            Self::IllegalInstruction => exception::ILLEGAL_INSTRUCTION,
            Self::Breakpoint => exception::BREAKPOINT,
            Self::LoadAddressMisaligned => exception::LOAD_ADDRESS_MISALIGNED,
            Self::LoadAccessFault => exception::LOAD_ACCESS_FAULT,
            Self::StoreAddressMisaligned => exception::STORE_ADDRESS_MISALIGNED,
            Self::StoreAccessFault => exception::STORE_ACCESS_FAULT,
            Self::EnvironmentCallFromUMode => exception::ENVIRONMENT_CALL_FROM_U_MODE,
            Self::EnvironmentCallFromSMode => exception::ENVIRONMENT_CALL_FROM_S_MODE,
            Self::EnvironmentCallFromVSMode => exception::ENVIRONMENT_CALL_FROM_VS_MODE,
            Self::EnvironmentCallFromMMode => exception::ENVIRONMENT_CALL_FROM_M_MODE,
            Self::InstructionPageFault => exception::INSTRUCTION_PAGE_FAULT,
            Self::LoadPageFault => exception::LOAD_PAGE_FAULT,
            Self::StorePageFault => exception::STORE_PAGE_FAULT,
            Self::InstructionGuestPageFault => exception::INSTRUCTION_GUEST_PAGE_FAULT,
            Self::LoadGuestPageFault => exception::LOAD_GUEST_PAGE_FAULT,
            Self::VirtualInstruction => exception::VIRTUAL_INSTRUCTION,
            Self::StoreGuestPageFault => exception::STORE_GUEST_PAGE_FAULT,
            Self::UnknownInstruction(code) => code,
        }
    }

    /// Returns the memory access that caused this trap, if it is memory-related.
    pub const fn access_type(self) -> Option<AccessType> {
        match self {
            Self::InstructionAddressMisaligned
            | Self::InstructionAccessFault
            | Self::InstructionPageFault
            | Self::InstructionGuestPageFault => Some(AccessType::Fetch),
            Self::LoadAddressMisaligned
            | Self::LoadAccessFault
            | Self::LoadPageFault
            | Self::LoadGuestPageFault => Some(AccessType::Read),
            Self::StoreAddressMisaligned
            | Self::StoreAccessFault
            | Self::StorePageFault
            | Self::StoreGuestPageFault => Some(AccessType::Write),
            _ => None,
        }
    }
}

impl fmt::Display for TrapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownInstruction(code) => write!(f, "UnknownInstruction({code})"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

/// A trap signal handed to the host's exception-delivery path.
///
/// Mirrors the arguments a RISC-V simulator needs to take a trap:
/// the guest-virtual-address flag, `tval` (faulting address or instruction
/// bits) and `tval2` (the guest physical address for guest-page faults).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{kind} (gva={gva}, tval={tval:#x}, tval2={tval2:#x})")]
pub struct Trap {
    /// Which exception was raised.
    pub kind: TrapKind,
    /// Virtualization flag taken from the hart state when the trap was raised.
    pub gva: bool,
    /// Faulting address or instruction bits.
    pub tval: u64,
    /// Secondary trap value.
    pub tval2: u64,
}

impl Trap {
    /// Creates a trap with cleared context fields.
    pub const fn new(kind: TrapKind) -> Self {
        Self {
            kind,
            gva: false,
            tval: 0,
            tval2: 0,
        }
    }

    /// Sets the virtualization flag.
    #[must_use]
    pub const fn with_gva(mut self, gva: bool) -> Self {
        self.gva = gva;
        self
    }

    /// Sets the primary trap value.
    #[must_use]
    pub const fn with_tval(mut self, tval: u64) -> Self {
        self.tval = tval;
        self
    }

    /// Returns the `mcause` exception code of this trap.
    pub const fn cause(&self) -> u64 {
        self.kind.cause()
    }
}

/// Errors raised while loading or validating extension configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for `Config`.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The requested register width is not 32 or 64 bits.
    #[error("unsupported XLEN {0} (expected 32 or 64)")]
    UnsupportedXlen(u32),
}
