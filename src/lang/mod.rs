/*!
## Rust Language Module

This Rust module provides lexical analysis and parsing of calculator
expressions. Input is the text the keypad assembles, or anything typed
in the same grammar: numbers with optional scientific exponent, the
operators `+ - * / ^` (or the display glyphs `×` and `÷`), and
parentheses.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

pub mod ast;
pub mod token;

#[cfg(test)]
mod tests;
