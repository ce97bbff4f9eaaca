/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type Column = std::ops::Range<usize>;
pub type LineNumber = u32;

/// Line named by `GOTO` or `THEN`, checked only when the jump is taken.
pub type Target = u64;

/// Largest line number accepted by the editor and by `GOTO`/`THEN`.
pub const MAX_LINE_NUMBER: LineNumber = 65529;

#[macro_use]
mod error;
mod line;
mod parse;

pub mod ast;
pub mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
