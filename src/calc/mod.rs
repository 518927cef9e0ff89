//! Infix expression calculator over [`BigInt`](crate::BigInt) values.
//!
//! One expression per input line, in the grammar
//!
//! ```text
//! line   = sum EOL
//! sum    = term  ( ('+' | '-') term )*
//! term   = factor ( ('*' | '/' | '%') factor )*
//! factor = '-' factor | '(' sum ')' | NUMBER
//! NUMBER = [0-9]+
//! ```
//!
//! Space and tab are ignored between tokens. Division truncates toward
//! zero; `%` is its matching remainder. The first error wins: evaluation
//! happens during the parse, so `1 / 0 + x` fails before `x` is read.

pub mod parser;
pub mod token;

use std::error::Error as StdError;
use std::fmt;

use crate::bigint::BigInt;
use crate::error::Error;

use parser::Parser;

/// Errors produced while tokenizing, parsing, or evaluating a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A character that belongs to no token.
    UnexpectedChar(char),
    /// A numeric literal rejected by the integer core.
    BadNumber(Error),
    /// Input continued after a complete expression.
    TrailingInput,
    /// A `(` group was not closed.
    UnmatchedParen,
    /// Expected `-`, `(`, or a number.
    ExpectedOperand,
    /// Division or remainder by zero.
    DivisionByZero,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::UnexpectedChar(c) => write!(f, "unexpected character: '{}'", c),
            CalcError::BadNumber(err) => write!(f, "bad number: {}", err),
            CalcError::TrailingInput => write!(f, "trailing character(s)"),
            CalcError::UnmatchedParen => write!(f, "expected ')'"),
            CalcError::ExpectedOperand => write!(f, "expected '-', number or '('"),
            CalcError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl StdError for CalcError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CalcError::BadNumber(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Error> for CalcError {
    fn from(err: Error) -> Self {
        match err {
            Error::DivisionByZero => CalcError::DivisionByZero,
            other => CalcError::BadNumber(other),
        }
    }
}

/// Evaluate one line holding a complete expression.
pub fn eval_line(line: &str) -> Result<BigInt, CalcError> {
    let mut parser = Parser::new(line)?;
    let value = parser.sum()?;
    if !parser.at_end() {
        return Err(CalcError::TrailingInput);
    }
    Ok(value)
}
