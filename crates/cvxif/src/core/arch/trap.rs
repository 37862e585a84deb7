//! Trap Classification.
//!
//! This module maps an abstract exception cause into the trap signal the host
//! expects. It performs the following:
//! 1. **Cause Mapping:** Converts `mcause` exception codes into `Trap` values.
//! 2. **Context Filling:** Attaches the virtualization flag and placeholder trap values.
//! 3. **Fallback:** Unmapped codes become `UnknownInstruction` carrying the raw code.
//!
//! Classification never returns normally in the architectural sense: callers
//! propagate the returned `Trap` as `Err` and the instruction is abandoned.

use tracing::debug;

use crate::common::error::{Trap, TrapKind};
use crate::isa::privileged::cause::exception;

/// Placeholder faulting address for injected memory faults.
///
/// Odd, so it is misaligned for every access width, and never mapped.
pub const FAULT_ADDRESS: u64 = 0x1;

/// Execution context captured when a trap is raised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrapContext {
    /// Virtualization flag of the hart at the time of the fault.
    pub virtualized: bool,
    /// Raw bits of the instruction being executed.
    pub insn: u32,
}

impl TrapContext {
    /// Creates a context for `insn` executing with the given virtualization flag.
    pub const fn new(insn: u32, virtualized: bool) -> Self {
        Self { virtualized, insn }
    }
}

/// Trap classifier.
///
/// Provides a unified interface for converting exception causes into
/// architectural trap values.
#[derive(Debug)]
pub struct TrapHandler;

impl TrapHandler {
    /// Converts an exception cause code into the trap the host must deliver.
    ///
    /// # Arguments
    ///
    /// * `cause` - The `mcause` exception code to raise.
    /// * `ctx` - The execution context of the faulting instruction.
    ///
    /// # Returns
    ///
    /// The fully populated `Trap`. Codes without a mapping yield
    /// `TrapKind::UnknownInstruction(cause)`.
    pub fn raise(cause: u64, ctx: TrapContext) -> Trap {
        let gva = ctx.virtualized;
        let trap = match cause {
            exception::INSTRUCTION_ADDRESS_MISALIGNED => {
                Self::memory_fault(TrapKind::InstructionAddressMisaligned, gva)
            }
            exception::INSTRUCTION_ACCESS_FAULT => {
                Self::memory_fault(TrapKind::InstructionAccessFault, gva)
            }
            exception::ILLEGAL_INSTRUCTION => Self::illegal(ctx.insn),
            exception::BREAKPOINT => Self::memory_fault(TrapKind::Breakpoint, gva),
            exception::LOAD_ADDRESS_MISALIGNED => {
                Self::memory_fault(TrapKind::LoadAddressMisaligned, gva)
            }
            exception::LOAD_ACCESS_FAULT => Self::memory_fault(TrapKind::LoadAccessFault, gva),
            exception::STORE_ADDRESS_MISALIGNED => {
                Self::memory_fault(TrapKind::StoreAddressMisaligned, gva)
            }
            exception::STORE_ACCESS_FAULT => Self::memory_fault(TrapKind::StoreAccessFault, gva),
            exception::ENVIRONMENT_CALL_FROM_U_MODE => {
                Trap::new(TrapKind::EnvironmentCallFromUMode)
            }
            exception::ENVIRONMENT_CALL_FROM_S_MODE => {
                Trap::new(TrapKind::EnvironmentCallFromSMode)
            }
            exception::ENVIRONMENT_CALL_FROM_VS_MODE => {
                Trap::new(TrapKind::EnvironmentCallFromVSMode)
            }
            exception::ENVIRONMENT_CALL_FROM_M_MODE => {
                Trap::new(TrapKind::EnvironmentCallFromMMode)
            }
            exception::INSTRUCTION_PAGE_FAULT => {
                Self::memory_fault(TrapKind::InstructionPageFault, gva)
            }
            exception::LOAD_PAGE_FAULT => Self::memory_fault(TrapKind::LoadPageFault, gva),
            exception::STORE_PAGE_FAULT => Self::memory_fault(TrapKind::StorePageFault, gva),
            // Guest-page faults and virtual-instruction traps carry no addresses.
            exception::INSTRUCTION_GUEST_PAGE_FAULT => {
                Trap::new(TrapKind::InstructionGuestPageFault)
            }
            exception::LOAD_GUEST_PAGE_FAULT => Trap::new(TrapKind::LoadGuestPageFault),
            exception::VIRTUAL_INSTRUCTION => Trap::new(TrapKind::VirtualInstruction),
            exception::STORE_GUEST_PAGE_FAULT => Trap::new(TrapKind::StoreGuestPageFault),
            other => Trap::new(TrapKind::UnknownInstruction(other)),
        };
        Self::logged(cause, trap)
    }

    /// Builds the illegal-instruction trap for `insn`.
    ///
    /// The instruction bits are reported in `tval`.
    pub fn illegal_instruction(insn: u32) -> Trap {
        Self::logged(exception::ILLEGAL_INSTRUCTION, Self::illegal(insn))
    }

    fn illegal(insn: u32) -> Trap {
        Trap::new(TrapKind::IllegalInstruction).with_tval(u64::from(insn))
    }

    // Every trap leaving the classifier passes through here.
    fn logged(cause: u64, trap: Trap) -> Trap {
        debug!(cause, kind = %trap.kind, tval = trap.tval, gva = trap.gva, "cvxif trap raised");
        trap
    }

    fn memory_fault(kind: TrapKind, gva: bool) -> Trap {
        Trap::new(kind).with_gva(gva).with_tval(FAULT_ADDRESS)
    }
}
