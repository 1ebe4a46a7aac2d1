/*!
# Rust Language Module

This Rust module provides lexical analysis of the assembly language
and the error type shared by the assembler and the machine.

*/

#[macro_use]
mod error;
mod lex;
mod line;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;

/// One-based source line. `None` when an error has no source position.
pub type LineNumber = Option<usize>;
/// Character range within a source line.
pub type Column = std::ops::Range<usize>;
