//! Arbitrary-precision signed integer arithmetic with a calculator frontend.
//!
//! A signed integer is a sign flag plus a magnitude of 32-bit limbs in
//! little-endian order:
//!
//! ```text
//! x = (negative ? -1 : +1) × Σ mag[i] × 2^(32i)
//! ```
//!
//! Addition, subtraction, and multiplication work directly on 32-bit limbs,
//! where a `32 × 32 → 64` product is one instruction on most targets.
//! Division narrows to 16-bit half-limbs so the quotient-digit estimate of
//! Knuth's Algorithm D only ever needs a hardware `32 ÷ 16` divide.
//!
//! ## Usage
//!
//! ```
//! use bigcalc::BigInt;
//!
//! let x: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let y = BigInt::from(42u32);
//! assert_eq!((&x * &y).to_decimal_string(), "5185185138518518513851851851380");
//! ```
//!
//! The `calc` binary wraps the same operations in a line-oriented infix
//! calculator; see the [`calc`] module for the grammar.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bigint;
pub mod calc;
pub mod decimal;
pub mod error;
pub mod limb;

mod serde_support;

// Randomized cross-checks of the arithmetic core.
#[cfg(test)]
mod property_tests;

pub use bigint::BigInt;
pub use calc::{eval_line, CalcError};
pub use error::Error;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
