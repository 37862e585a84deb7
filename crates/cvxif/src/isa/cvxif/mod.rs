//! CV-X-IF Custom Instruction Encodings.
//!
//! The CORE-V eXtension Interface reserves the four RISC-V custom opcodes, reuses
//! the four R4-type fused multiply-add opcodes, and claims two compressed
//! patterns in quadrant 0.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes claimed by the extension.
//! - `funct3`: Operation groups inside custom-3 and the R4-type space.
//! - `funct7`: ALU-class operation codes and the implicit-destination R-type code.
//! - `funct4`: Compressed operation codes.
//! - `encodings`: Match/mask pairs used to build the decode table.

/// Major opcodes claimed by the extension.
pub mod opcodes;

/// Function code 3 definitions for CV-X-IF operation groups.
pub mod funct3;

/// Function code 7 definitions for CV-X-IF operations.
pub mod funct7;

/// Function code 4 definitions for compressed CV-X-IF operations.
pub mod funct4;

/// Match/mask pairs for every decode table entry.
pub mod encodings;
