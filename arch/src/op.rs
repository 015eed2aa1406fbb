use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Operand syntax a mnemonic accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// `%XX` or one of the indexed forms in [`crate::reg::Index`]
    Reg,
    /// bare `XX`
    Imm,
    /// `$NNNN`
    Label,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Op {
    ANA = 0x0,
    ADI = 0x1,
    XRA = 0x2,
    XRI = 0x3,
    ADA = 0x4,
    ANI = 0x5,
    SBA = 0x6,
    SBI = 0x7,
    BNC = 0x8,
    BNZ = 0x9,
    JPR = 0xA,
    JMP = 0xB,
    LDA = 0xC,
    LDI = 0xD,
    STA = 0xE,
    STX = 0xF,
}

impl Op {
    pub fn class(&self) -> Class {
        use Op::*;
        match self {
            ANA | XRA | ADA | SBA | JPR | LDA | STA | STX => Class::Reg,
            ADI | XRI | ANI | SBI | LDI => Class::Imm,
            BNC | BNZ | JMP => Class::Label,
        }
    }

    pub fn opcode(&self) -> u8 {
        (*self).into()
    }
}

/// Anything that may sit in the mnemonic column: a machine op or the `ORG` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Op(Op),
    Org,
}

impl Mnemonic {
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("ORG") {
            return Some(Mnemonic::Org);
        }
        s.parse::<Op>().ok().map(Mnemonic::Op)
    }

    pub fn class(&self) -> Class {
        match self {
            Mnemonic::Op(op) => op.class(),
            Mnemonic::Org => Class::Imm,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mnemonic::Op(op) => write!(f, "{}", op),
            Mnemonic::Org => write!(f, "ORG"),
        }
    }
}
