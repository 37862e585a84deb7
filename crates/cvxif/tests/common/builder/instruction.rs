use cvxif_core::isa::cvxif::{funct3, funct4, funct7, opcodes};

/// Fluent builder for 32-bit R-type and R4-type words.
///
/// `rs3` and `funct2` share bits 31:25 with `funct7`; setting either
/// overrides the matching bits of `funct7`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    rs3: Option<u32>,
    funct2: Option<u32>,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn rs3(mut self, rs3: u32) -> Self {
        self.rs3 = Some(rs3);
        self
    }

    pub fn funct2(mut self, funct2: u32) -> Self {
        self.funct2 = Some(funct2);
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn build(self) -> u32 {
        let mut top = self.funct7 & 0x7F;
        if let Some(rs3) = self.rs3 {
            top = (top & 0x03) | ((rs3 & 0x1F) << 2);
        }
        if let Some(funct2) = self.funct2 {
            top = (top & !0x03) | (funct2 & 0x03);
        }
        top << 25
            | (self.rs2 & 0x1F) << 20
            | (self.rs1 & 0x1F) << 15
            | (self.funct3 & 0x7) << 12
            | (self.rd & 0x1F) << 7
            | (self.opcode & 0x7F)
    }

    // --- custom-3 helpers ---

    pub fn cus_nop(rd: u32) -> u32 {
        Self::new()
            .opcode(opcodes::OP_CUSTOM_3)
            .rd(rd)
            .funct3(funct3::FUNC3_0)
            .funct7(funct7::CUS_NOP)
            .build()
    }

    pub fn custom3_alu(f7: u32, rd: u32, rs1: u32, rs2: u32) -> u32 {
        Self::new()
            .opcode(opcodes::OP_CUSTOM_3)
            .rd(rd)
            .rs1(rs1)
            .rs2(rs2)
            .funct3(funct3::FUNC3_1)
            .funct7(f7)
            .build()
    }

    pub fn cus_add(rd: u32, rs1: u32, rs2: u32) -> u32 {
        Self::custom3_alu(funct7::CUS_ADD, rd, rs1, rs2)
    }

    // --- R4-type helpers ---

    pub fn r4(opcode: u32, rd: u32, rs1: u32, rs2: u32, rs3: u32) -> u32 {
        Self::new()
            .opcode(opcode)
            .rd(rd)
            .rs1(rs1)
            .rs2(rs2)
            .rs3(rs3)
            .funct2(0)
            .funct3(funct3::FUNC3_0)
            .build()
    }

    pub fn add_rs3_rtype(rs1: u32, rs2: u32) -> u32 {
        Self::new()
            .opcode(opcodes::OP_ADD_RS3_MADD)
            .rs1(rs1)
            .rs2(rs2)
            .funct3(funct3::FUNC3_1)
            .funct7(funct7::CUS_ADD_RS3_RTYPE)
            .build()
    }
}

/// Encodes a CR-type compressed word in the low 16 bits.
pub fn cr_type(funct4: u32, rs1: u32, rs2: u32, quadrant: u32) -> u32 {
    (funct4 & 0xF) << 12 | (rs1 & 0x1F) << 7 | (rs2 & 0x1F) << 2 | (quadrant & 0x3)
}

pub fn cus_cadd(rs1: u32, rs2: u32) -> u32 {
    cr_type(funct4::FUNC4_CADD, rs1, rs2, funct4::QUADRANT_C0)
}

pub fn cus_cnop() -> u32 {
    cr_type(funct4::FUNC4_CNOP, 0, 0, funct4::QUADRANT_C0)
}
