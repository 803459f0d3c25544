use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::token::*;

/// One line of calculator input, lexed and ready to parse.
/// Error columns refer to the `Display` form of the line.
#[derive(Debug, PartialEq)]
pub struct Line {
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        Line { tokens: lex(s) }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn ast(&self) -> Result<Expression, Error> {
        parse(&self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: String = self.tokens.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", s)
    }
}
