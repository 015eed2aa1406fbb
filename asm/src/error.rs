use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// A line that cannot be assembled. Each kind carries the offending token
/// (already upper-cased).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected token \"{0}\"")]
    UnknownMnemonic(String),

    #[error("incorrect label \"{0}\"")]
    BadLabel(String),

    #[error("incorrect label operand \"{0}\"")]
    BadLabelOperand(String),

    #[error("label operand not allowed \"{0}\"")]
    LabelNotAllowed(String),

    #[error("label operand required \"{0}\"")]
    LabelRequired(String),

    #[error("not allowed indexed mode operand \"{0}\"")]
    IndexNotAllowed(String),

    #[error("not allowed reg operand \"{0}\"")]
    RegNotAllowed(String),

    #[error("reg operand required, possibly add \"%\" prefix to \"{0}\"")]
    RegRequired(String),

    #[error("incorrect operand \"{0}\"")]
    BadNumber(String),

    #[error("missing operand after \"{0}\"")]
    MissingOperand(String),

    #[error("unexpected trailing token \"{0}\"")]
    TrailingGarbage(String),
}
