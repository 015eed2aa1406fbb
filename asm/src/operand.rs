use arch::{op::Class, reg::Index};

use crate::{error::SyntaxError, symbols::Symbols};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// `$N`, resolved through the symbol table
    Label(u16),
    /// `%XX`
    Reg(u8),
    /// `%IX`, `@IY+`, ...
    Index(Index),
    /// `XX`
    Imm(u8),
}

impl Operand {
    /// Classify `token` against the operand class the mnemonic requires.
    pub fn parse(token: &str, class: Class) -> Result<Operand, SyntaxError> {
        let err = |kind: fn(String) -> SyntaxError| kind(token.to_string());

        if let Some(id) = token.strip_prefix('$') {
            if class != Class::Label {
                return Err(err(SyntaxError::LabelNotAllowed));
            }
            return parse_label(id)
                .map(Operand::Label)
                .ok_or_else(|| err(SyntaxError::BadLabelOperand));
        }

        if let Some(index) = Index::parse(token) {
            if class != Class::Reg {
                return Err(err(SyntaxError::IndexNotAllowed));
            }
            return Ok(Operand::Index(index));
        }

        match (class, token.strip_prefix('%')) {
            (Class::Label, _) => Err(err(SyntaxError::LabelRequired)),
            (Class::Reg, Some(hex)) => parse_hex(hex)
                .map(Operand::Reg)
                .ok_or_else(|| err(SyntaxError::BadNumber)),
            (Class::Reg, None) => Err(err(SyntaxError::RegRequired)),
            (Class::Imm, Some(_)) => Err(err(SyntaxError::RegNotAllowed)),
            (Class::Imm, None) => parse_hex(token)
                .map(Operand::Imm)
                .ok_or_else(|| err(SyntaxError::BadNumber)),
        }
    }

    /// Operand byte, or `None` for a label that has no address yet.
    pub fn resolve(&self, symbols: &Symbols) -> Option<u8> {
        match self {
            Operand::Label(id) => symbols.get(*id),
            Operand::Reg(v) | Operand::Imm(v) => Some(*v),
            Operand::Index(index) => Some(index.code()),
        }
    }

    /// Listing form. Register-class bytes keep their `%` marker, immediates
    /// are right-aligned under them.
    pub fn render(&self) -> String {
        match self {
            Operand::Label(id) => format!("${}", id),
            Operand::Reg(v) => format!("%{:02X}", v),
            Operand::Index(index) => format!("%{:02X}", index.code()),
            Operand::Imm(v) => format!("{:>3}", format!("{:02X}", v)),
        }
    }
}

/// 1 to 4 decimal digits, 0..=9999.
pub fn parse_label(s: &str) -> Option<u16> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// 1 or 2 hex digits, 00..=FF.
pub fn parse_hex(s: &str) -> Option<u8> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(s, 16).ok()
}
