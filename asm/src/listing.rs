use arch::{op::Mnemonic, word::Word};
use std::fmt::Write;

use crate::{assemble::Pass, error::SyntaxError, operand::Operand};

const COL_WORD: usize = 12;
const COL_LABEL: usize = 24;
const COL_MNEMONIC: usize = 32;
const COL_OPERAND: usize = 40;
const COL_COMMENT: usize = 48;

/// Builds one listing line. Fields land on fixed columns; a field that would
/// start inside the previous one is pushed right by a single space.
pub struct LineBuilder {
    buf: String,
}

impl LineBuilder {
    pub fn new(line_no: usize, pc: u8) -> Self {
        LineBuilder {
            buf: format!("{:4}:   {:02X}", line_no, pc),
        }
    }

    pub fn word(&mut self, word: Word) -> &mut Self {
        self.column(COL_WORD);
        let _ = write!(self.buf, "{:03X}", word);
        self
    }

    pub fn label(&mut self, id: u16) -> &mut Self {
        self.column(COL_LABEL);
        let _ = write!(self.buf, "${}", id);
        self
    }

    pub fn mnemonic(&mut self, mnemonic: Mnemonic) -> &mut Self {
        self.column(COL_MNEMONIC);
        let _ = write!(self.buf, "{}", mnemonic);
        self
    }

    pub fn operand(&mut self, operand: &Operand) -> &mut Self {
        self.column(COL_OPERAND);
        self.buf.push_str(&operand.render());
        self
    }

    pub fn comment(&mut self, comment: &str) -> &mut Self {
        self.column(COL_COMMENT);
        self.buf.push_str(comment);
        self
    }

    pub fn finish(self) -> String {
        let mut buf = self.buf;
        buf.push('\n');
        buf
    }

    fn column(&mut self, col: usize) {
        let len = self.buf.chars().count();
        if len < col {
            self.buf.extend(std::iter::repeat(' ').take(col - len));
        } else {
            self.buf.push(' ');
        }
    }
}

pub fn header(name: &str, pass: Pass) -> String {
    format!(
        " ---- Source file: {}. {} pass assembler listing. ----\n\n",
        name, pass
    )
}

pub fn syntax_error(err: &SyntaxError, line_no: usize, raw: &str) -> String {
    format!(
        "Syntax error: {}. The source line is ignored.\n{:4}:\t\t\t{}\n",
        err, line_no, raw
    )
}

pub fn warning(id: u16) -> String {
    format!(
        "Warning: multiple definitions of label \"${}\", the last definition wins.\n",
        id
    )
}

pub fn undefined(id: u16) -> String {
    format!(
        "Error: label \"${}\" is not defined. Operand set to 00.\n",
        id
    )
}
