//! # Fishy
//!
//! A teaching compiler for a tiny structured language. Fishy source is
//! translated to C in a single pass: the lexer hands tokens to a
//! recursive-descent parser which writes C as each rule is recognized.
//!
//! ```text
//! $ fishy countdown.fishy
//! $ cc out.c -o countdown && ./countdown
//! ```
//!
//! The library can be used without touching the filesystem.
//! ```
//! let c = fishy::compile("LET a = 1\nPRINT a\n").unwrap();
//! assert!(c.starts_with("#include <stdio.h>\n"));
//! assert!(c.contains("float a;\n"));
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod emit;
pub mod lang;
pub mod term;

/// Translate a whole program to C without writing anything.
pub fn compile(source: &str) -> Result<String, lang::Error> {
    let mut emitter = emit::Emitter::default();
    lang::parse(source, &mut emitter)?;
    Ok(emitter.source())
}
