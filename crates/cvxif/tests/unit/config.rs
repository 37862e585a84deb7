//! # Configuration Tests
//!
//! Verifies defaults and JSON loading of the extension configuration.

use cvxif_core::common::ConfigError;
use cvxif_core::config::{Config, Xlen};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.extension.xlen, Xlen::Rv64);
    assert!(config.extension.compressed);
    assert!(config.extension.rs3_ops);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.extension.xlen, Xlen::Rv64);
    assert!(config.extension.compressed);
    assert!(config.extension.rs3_ops);
}

#[test]
fn test_partial_extension_section() {
    let config = Config::from_json(r#"{ "extension": { "compressed": false } }"#).unwrap();
    assert!(!config.extension.compressed);
    assert!(config.extension.rs3_ops);
    assert_eq!(config.extension.xlen, Xlen::Rv64);
}

#[rstest]
#[case(32, Xlen::Rv32)]
#[case(64, Xlen::Rv64)]
fn test_xlen_from_json(#[case] bits: u32, #[case] expected: Xlen) {
    let json = format!(r#"{{ "extension": {{ "xlen": {bits} }} }}"#);
    let config = Config::from_json(&json).unwrap();
    assert_eq!(config.extension.xlen, expected);
    assert_eq!(config.extension.xlen.bits(), bits);
}

#[test]
fn test_unsupported_xlen_rejected() {
    let err = Config::from_json(r#"{ "extension": { "xlen": 128 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("unsupported XLEN 128"));
}

#[test]
fn test_xlen_try_from() {
    assert_eq!(Xlen::try_from(32).unwrap(), Xlen::Rv32);
    assert!(matches!(
        Xlen::try_from(16),
        Err(ConfigError::UnsupportedXlen(16))
    ));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        Config::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[rstest]
#[case(Xlen::Rv32, 0x8000_0000, 0xFFFF_FFFF_8000_0000)]
#[case(Xlen::Rv32, 0x1_7FFF_FFFF, 0x7FFF_FFFF)]
#[case(Xlen::Rv64, 0x8000_0000, 0x8000_0000)]
fn test_xlen_sext(#[case] xlen: Xlen, #[case] input: u64, #[case] expected: u64) {
    assert_eq!(xlen.sext(input), expected);
}
