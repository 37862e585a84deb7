//! Configuration system for the CV-X-IF extension.
//!
//! This module defines the configuration passed to `Cvxif::new`. It provides:
//! 1. **Structures:** Hierarchical config for general options and the extension itself.
//! 2. **Enums:** Host register width.
//! 3. **Loading:** JSON deserialization with defaults for every missing field.
//!
//! The host builds the configuration and hands it to the engine constructor;
//! there is no process-wide registry.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Register compressed CNOP/CADD entries by default.
    pub const COMPRESSED: bool = true;

    /// Register the R4-type three-source entries by default.
    pub const RS3_OPS: bool = true;
}

/// Host register width.
///
/// On RV32 every written-back value is sign-extended from bit 31, which is how
/// a 32-bit host keeps its 64-bit register storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u32")]
pub enum Xlen {
    /// 32-bit registers.
    Rv32,
    /// 64-bit registers.
    #[default]
    Rv64,
}

impl Xlen {
    /// Returns the register width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }

    /// Sign-extends `val` from the register width to 64 bits.
    #[inline]
    pub const fn sext(self, val: u64) -> u64 {
        match self {
            Self::Rv32 => val as i32 as i64 as u64,
            Self::Rv64 => val,
        }
    }
}

impl TryFrom<u32> for Xlen {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(Self::Rv32),
            64 => Ok(Self::Rv64),
            other => Err(ConfigError::UnsupportedXlen(other)),
        }
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use cvxif_core::config::{Config, Xlen};
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.extension.xlen, Xlen::Rv64);
/// ```
///
/// Loading from JSON; omitted fields keep their defaults:
///
/// ```
/// use cvxif_core::config::{Config, Xlen};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "extension": { "xlen": 32, "rs3_ops": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.extension.xlen, Xlen::Rv32);
/// assert!(config.extension.compressed);
/// assert!(!config.extension.rs3_ops);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General options
    #[serde(default)]
    pub general: GeneralConfig,
    /// Extension shape (register width and enabled operation groups)
    #[serde(default)]
    pub extension: ExtensionConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid JSON for `Config`,
    /// including an unsupported `xlen` value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed custom instruction with its disassembly at `info` level.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Extension shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionConfig {
    /// Host register width
    #[serde(default)]
    pub xlen: Xlen,

    /// Register the compressed CUS_CNOP and CUS_CADD entries.
    #[serde(default = "ExtensionConfig::default_compressed")]
    pub compressed: bool,

    /// Register the R4-type CUS_ADD_RS3_* entries.
    ///
    /// These reuse the F/D fused multiply-add opcodes; hosts that implement F
    /// must turn them off.
    #[serde(default = "ExtensionConfig::default_rs3_ops")]
    pub rs3_ops: bool,
}

impl ExtensionConfig {
    const fn default_compressed() -> bool {
        defaults::COMPRESSED
    }

    const fn default_rs3_ops() -> bool {
        defaults::RS3_OPS
    }
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            xlen: Xlen::default(),
            compressed: defaults::COMPRESSED,
            rs3_ops: defaults::RS3_OPS,
        }
    }
}
