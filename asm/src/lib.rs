pub mod assemble;
pub mod diag;
pub mod error;
pub mod image;
pub mod lexer;
pub mod listing;
pub mod operand;
pub mod parser;
pub mod source;
pub mod symbols;

pub use assemble::{assemble, Assembly, Pass};
