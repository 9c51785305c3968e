use std::error::Error;
use std::fmt;

use crate::parser::Rule;

/// Everything that can go wrong turning source text into an AST: a thin
/// wrapper around the grammar's own error type plus the handful of
/// semantic checks the grammar itself cannot express (duplicate labels,
/// bad escape sequences).
#[derive(Debug)]
pub enum ParseError {
    Grammar(Box<pest::error::Error<Rule>>),
    DuplicateLabel(String),
    InvalidEscape(String),
    InvalidOperand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Grammar(e) => write!(f, "{}", e),
            ParseError::DuplicateLabel(name) => write!(f, "Duplicate label: {}", name),
            ParseError::InvalidEscape(seq) => write!(f, "Invalid escape sequence: {}", seq),
            ParseError::InvalidOperand(text) => write!(f, "Invalid operand: {}", text),
        }
    }
}

impl Error for ParseError {}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(e: pest::error::Error<Rule>) -> Self {
        ParseError::Grammar(Box::new(e))
    }
}
