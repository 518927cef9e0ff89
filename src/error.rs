//! Error type shared by the integer core and the calculator frontend.

use std::error::Error as StdError;
use std::fmt;

/// Errors produced by the integer core.
///
/// Arithmetic on well-formed values is total apart from division by zero;
/// the remaining kinds can only arise while constructing a value from text.
/// Heap exhaustion aborts the process (the global allocator's behavior) and
/// therefore has no variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A decimal literal exceeded the configured capacity.
    NumberTooLong {
        /// The maximum number of digits accepted.
        limit: usize,
    },
    /// The input is not a valid decimal numeral: empty, a bare sign, or a
    /// non-digit where a digit was required.
    InvalidNumeral,
    /// The divisor was zero.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NumberTooLong { limit } => {
                write!(f, "number longer than {} digits", limit)
            }
            Error::InvalidNumeral => write!(f, "invalid decimal numeral"),
            Error::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl StdError for Error {}
