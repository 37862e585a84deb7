//! # Trap Classification Tests
//!
//! Maps every exception cause through `TrapHandler::raise` and checks the
//! trap kind and the context fields attached to it.

use crate::common::harness::capture_logs;
use cvxif_core::TrapKind;
use cvxif_core::core::arch::trap::{FAULT_ADDRESS, TrapContext, TrapHandler};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

const INSN: u32 = 0x0062_957B;

#[rstest]
#[case(0, TrapKind::InstructionAddressMisaligned)]
#[case(1, TrapKind::InstructionAccessFault)]
#[case(3, TrapKind::Breakpoint)]
#[case(4, TrapKind::LoadAddressMisaligned)]
#[case(5, TrapKind::LoadAccessFault)]
#[case(6, TrapKind::StoreAddressMisaligned)]
#[case(7, TrapKind::StoreAccessFault)]
#[case(12, TrapKind::InstructionPageFault)]
#[case(13, TrapKind::LoadPageFault)]
#[case(15, TrapKind::StorePageFault)]
fn test_memory_faults_carry_context(
    #[case] cause: u64,
    #[case] kind: TrapKind,
    #[values(false, true)] virtualized: bool,
) {
    let trap = TrapHandler::raise(cause, TrapContext::new(INSN, virtualized));
    assert_eq!(trap.kind, kind);
    assert_eq!(trap.gva, virtualized);
    assert_eq!(trap.tval, FAULT_ADDRESS);
    assert_eq!(trap.tval2, 0);
}

#[rstest]
#[case(8, TrapKind::EnvironmentCallFromUMode)]
#[case(9, TrapKind::EnvironmentCallFromSMode)]
#[case(10, TrapKind::EnvironmentCallFromVSMode)]
#[case(11, TrapKind::EnvironmentCallFromMMode)]
#[case(20, TrapKind::InstructionGuestPageFault)]
#[case(21, TrapKind::LoadGuestPageFault)]
#[case(22, TrapKind::VirtualInstruction)]
#[case(23, TrapKind::StoreGuestPageFault)]
fn test_context_free_traps(#[case] cause: u64, #[case] kind: TrapKind) {
    let trap = TrapHandler::raise(cause, TrapContext::new(INSN, true));
    assert_eq!(trap.kind, kind);
    assert!(!trap.gva);
    assert_eq!(trap.tval, 0);
}

#[test]
fn test_illegal_instruction_reports_bits() {
    let trap = TrapHandler::raise(2, TrapContext::new(INSN, true));
    assert_eq!(trap.kind, TrapKind::IllegalInstruction);
    assert_eq!(trap.tval, u64::from(INSN));
    assert!(!trap.gva);
}

#[rstest]
#[case(14)]
#[case(16)]
#[case(19)]
#[case(24)]
#[case(u64::MAX)]
fn test_unmapped_causes_fall_back(#[case] cause: u64) {
    let trap = TrapHandler::raise(cause, TrapContext::new(INSN, false));
    assert_eq!(trap.kind, TrapKind::UnknownInstruction(cause));
    assert_eq!(trap.cause(), cause);
}

#[rstest]
#[case::memory_fault(5, "kind=LoadAccessFault")]
#[case::illegal(2, "kind=IllegalInstruction")]
#[case::unknown(14, "kind=UnknownInstruction(14)")]
fn test_classification_is_logged(#[case] cause: u64, #[case] kind: &str) {
    let (trap, logs) = capture_logs(|| TrapHandler::raise(cause, TrapContext::new(INSN, false)));
    assert_eq!(trap.cause(), cause);
    assert_eq!(logs.matches("cvxif trap raised").count(), 1, "{logs}");
    assert!(logs.contains(kind), "{logs}");
}

#[test]
fn test_direct_illegal_instruction_is_logged() {
    let (trap, logs) = capture_logs(|| TrapHandler::illegal_instruction(INSN));
    assert_eq!(trap.tval, u64::from(INSN));
    assert!(logs.contains("kind=IllegalInstruction"), "{logs}");
    assert!(logs.contains(&format!("tval={}", u64::from(INSN))), "{logs}");
}

proptest! {
    #[test]
    fn prop_cause_round_trips(cause in 0u64..64, virtualized in any::<bool>()) {
        let trap = TrapHandler::raise(cause, TrapContext::new(INSN, virtualized));
        prop_assert_eq!(trap.cause(), cause);
    }
}
