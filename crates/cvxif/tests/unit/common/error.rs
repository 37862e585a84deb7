//! # Error and Trap Tests
//!
//! This module contains unit tests for trap kinds, their cause codes and
//! display formats, and configuration errors.

use cvxif_core::common::{AccessType, ConfigError, Trap, TrapKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(TrapKind::InstructionAddressMisaligned, 0)]
#[case(TrapKind::InstructionAccessFault, 1)]
#[case(TrapKind::IllegalInstruction, 2)]
#[case(TrapKind::Breakpoint, 3)]
#[case(TrapKind::LoadAddressMisaligned, 4)]
#[case(TrapKind::LoadAccessFault, 5)]
#[case(TrapKind::StoreAddressMisaligned, 6)]
#[case(TrapKind::StoreAccessFault, 7)]
#[case(TrapKind::EnvironmentCallFromUMode, 8)]
#[case(TrapKind::EnvironmentCallFromSMode, 9)]
#[case(TrapKind::EnvironmentCallFromVSMode, 10)]
#[case(TrapKind::EnvironmentCallFromMMode, 11)]
#[case(TrapKind::InstructionPageFault, 12)]
#[case(TrapKind::LoadPageFault, 13)]
#[case(TrapKind::StorePageFault, 15)]
#[case(TrapKind::InstructionGuestPageFault, 20)]
#[case(TrapKind::LoadGuestPageFault, 21)]
#[case(TrapKind::VirtualInstruction, 22)]
#[case(TrapKind::StoreGuestPageFault, 23)]
#[case(TrapKind::UnknownInstruction(99), 99)]
fn test_trap_kind_cause_codes(#[case] kind: TrapKind, #[case] cause: u64) {
    assert_eq!(kind.cause(), cause);
    assert_eq!(Trap::new(kind).cause(), cause);
}

#[rstest]
#[case(TrapKind::InstructionPageFault, Some(AccessType::Fetch))]
#[case(TrapKind::LoadGuestPageFault, Some(AccessType::Read))]
#[case(TrapKind::StoreAccessFault, Some(AccessType::Write))]
#[case(TrapKind::Breakpoint, None)]
#[case(TrapKind::IllegalInstruction, None)]
fn test_trap_kind_access_type(#[case] kind: TrapKind, #[case] access: Option<AccessType>) {
    assert_eq!(kind.access_type(), access);
}

#[test]
fn test_trap_new_clears_context() {
    let trap = Trap::new(TrapKind::LoadAccessFault);
    assert!(!trap.gva);
    assert_eq!(trap.tval, 0);
    assert_eq!(trap.tval2, 0);
}

#[test]
fn test_trap_builders_set_fields() {
    let trap = Trap::new(TrapKind::StorePageFault)
        .with_gva(true)
        .with_tval(0x1);
    assert!(trap.gva);
    assert_eq!(trap.tval, 0x1);
}

#[test]
fn test_trap_display() {
    let trap = Trap::new(TrapKind::IllegalInstruction).with_tval(0x7b);
    assert_eq!(
        trap.to_string(),
        "IllegalInstruction (gva=false, tval=0x7b, tval2=0x0)"
    );
}

#[test]
fn test_unknown_trap_display() {
    let trap = Trap::new(TrapKind::UnknownInstruction(14));
    assert!(trap.to_string().starts_with("UnknownInstruction(14)"));
}

#[test]
fn test_trap_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Trap::new(TrapKind::Breakpoint));
    assert!(err.to_string().contains("Breakpoint"));
}

#[test]
fn test_config_error_display() {
    assert_eq!(
        ConfigError::UnsupportedXlen(128).to_string(),
        "unsupported XLEN 128 (expected 32 or 64)"
    );
}
