use arch::op::Mnemonic;

use crate::{error::SyntaxError, lexer, operand, operand::Operand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stmt {
    pub mnemonic: Mnemonic,
    pub operand: Operand,
}

/// One classified source line. Every field is optional, so a blank line is
/// `Line::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line<'a> {
    pub label: Option<u16>,
    pub stmt: Option<Stmt>,
    pub comment: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Label,
    Mnemonic,
    Operand(Mnemonic),
    Comment,
}

impl<'a> Line<'a> {
    pub fn parse(raw: &'a str) -> Result<Line<'a>, SyntaxError> {
        let lexer::Lexed { tokens, comment } = lexer::lex(raw);
        let mut line = Line {
            comment,
            ..Default::default()
        };

        let mut state = State::Label;
        let mut idx = 0;
        while let Some(token) = tokens.get(idx) {
            state = match state {
                State::Label => match token.strip_prefix('$') {
                    Some(id) => {
                        let id = operand::parse_label(id)
                            .ok_or_else(|| SyntaxError::BadLabel(token.clone()))?;
                        line.label = Some(id);
                        idx += 1;
                        State::Mnemonic
                    }
                    // No label: look at the same token again as a mnemonic
                    None => State::Mnemonic,
                },
                State::Mnemonic => {
                    let mnemonic = Mnemonic::parse(token)
                        .ok_or_else(|| SyntaxError::UnknownMnemonic(token.clone()))?;
                    idx += 1;
                    State::Operand(mnemonic)
                }
                State::Operand(mnemonic) => {
                    let operand = Operand::parse(token, mnemonic.class())?;
                    line.stmt = Some(Stmt { mnemonic, operand });
                    idx += 1;
                    State::Comment
                }
                State::Comment => return Err(SyntaxError::TrailingGarbage(token.clone())),
            };
        }

        if let State::Operand(mnemonic) = state {
            return Err(SyntaxError::MissingOperand(mnemonic.to_string()));
        }
        Ok(line)
    }
}
