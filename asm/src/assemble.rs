use arch::{op::Mnemonic, word::Word};
use std::fmt;

use crate::{
    diag::Diagnostics,
    image::Image,
    listing::{self, LineBuilder},
    operand::Operand,
    parser::Line,
    symbols::Symbols,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Syntax check and label collection
    First,
    /// Label resolution and final code
    Second,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::First => write!(f, "First"),
            Pass::Second => write!(f, "Second"),
        }
    }
}

/// Result of assembling one source.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Last pass that ran; its listing is the one kept.
    pub pass: Pass,
    pub listing: String,
    /// `None` when the first pass found syntax errors.
    pub image: Option<Image>,
    pub diag: Diagnostics,
    pub labels: usize,
}

/// Everything mutable during a run. Lives for both passes; only the PC and
/// the image are reset between them.
pub struct Session<'a> {
    name: &'a str,
    symbols: Symbols,
    image: Image,
    pc: u8,
    diag: Diagnostics,
}

impl<'a> Session<'a> {
    pub fn new(name: &'a str) -> Self {
        Session {
            name,
            symbols: Symbols::new(),
            image: Image::new(),
            pc: 0,
            diag: Diagnostics::default(),
        }
    }

    pub fn diag(&self) -> Diagnostics {
        self.diag
    }

    /// Scan the whole source once and return the listing of this pass.
    pub fn pass<S: AsRef<str>>(&mut self, pass: Pass, lines: &[S]) -> String {
        self.pc = 0;
        self.image.clear();

        let mut out = listing::header(self.name, pass);
        for (idx, raw) in lines.iter().enumerate() {
            let raw = raw.as_ref();
            let line_no = idx + 1;
            match Line::parse(raw) {
                Ok(line) => self.line(pass, line_no, &line, &mut out),
                Err(err) => {
                    self.diag.syntax_errors += 1;
                    out.push_str(&listing::syntax_error(&err, line_no, raw));
                }
            }
        }
        out
    }

    fn line(&mut self, pass: Pass, line_no: usize, line: &Line, out: &mut String) {
        if let Some(id) = line.label {
            match pass {
                Pass::First => self.symbols.define(id, self.pc, line_no),
                Pass::Second => {
                    if !self.symbols.is_authoritative(id, line_no) {
                        self.diag.warnings += 1;
                        out.push_str(&listing::warning(id));
                    }
                }
            }
        }

        let mut word = None;
        if let Some(stmt) = &line.stmt {
            let value = match (stmt.operand.resolve(&self.symbols), stmt.operand) {
                (Some(value), _) => value,
                (None, Operand::Label(id)) => {
                    // Forward references are fine until every label is known
                    if pass == Pass::Second {
                        self.diag.errors += 1;
                        out.push_str(&listing::undefined(id));
                    }
                    0
                }
                (None, _) => 0,
            };
            match stmt.mnemonic {
                Mnemonic::Op(op) => {
                    let w = Word::new(op, value);
                    self.image.write(self.pc, w);
                    word = Some(w);
                }
                Mnemonic::Org => self.pc = value,
            }
        }

        let mut builder = LineBuilder::new(line_no, self.pc);
        if let Some(w) = word {
            builder.word(w);
        }
        if let Some(id) = line.label {
            builder.label(id);
        }
        if let Some(stmt) = &line.stmt {
            builder.mnemonic(stmt.mnemonic).operand(&stmt.operand);
        }
        if let Some(comment) = line.comment {
            builder.comment(comment);
        }
        out.push_str(&builder.finish());

        if word.is_some() {
            self.pc = self.pc.wrapping_add(1);
        }
    }
}

/// Two-pass assembly of `lines`. The second pass only runs when the first
/// one found no syntax error.
pub fn assemble<S: AsRef<str>>(name: &str, lines: &[S]) -> Assembly {
    let mut session = Session::new(name);

    let listing = session.pass(Pass::First, lines);
    if session.diag.has_syntax_errors() {
        return Assembly {
            pass: Pass::First,
            listing,
            image: None,
            diag: session.diag,
            labels: session.symbols.len(),
        };
    }

    let listing = session.pass(Pass::Second, lines);
    Assembly {
        pass: Pass::Second,
        listing,
        image: Some(session.image),
        diag: session.diag,
        labels: session.symbols.len(),
    }
}
