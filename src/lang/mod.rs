/*!
# Rust Language Module

This Rust module provides lexical analysis and translation of the Fishy language.
There is no syntax tree. The parser drives an [`Emitter`](crate::emit::Emitter)
directly as each grammar rule is recognized.

*/

/// 1-based line in the source file.
pub type LineNumber = usize;
/// Character range within a line, 0-based.
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod parse;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use lex::Lexer;
pub use parse::parse;
pub use token::Token;
