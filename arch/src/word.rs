use crate::op::Op;
use std::fmt;

/// 12-bit instruction word: opcode in bits 11..8, operand in bits 7..0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Word(u16);

impl Word {
    pub fn new(op: Op, operand: u8) -> Self {
        Word((op.opcode() as u16) << 8 | operand as u16)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }
}

impl fmt::UpperHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
