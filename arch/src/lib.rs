pub mod op;
pub mod reg;
pub mod word;
