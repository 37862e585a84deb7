//! CV-X-IF Function Codes (funct3).

/// NOP-class group in custom-3; also the R4-type three-source forms.
pub const FUNC3_0: u32 = 0b000;

/// ALU-class group in custom-3; also the implicit-destination R-type form.
pub const FUNC3_1: u32 = 0b001;
