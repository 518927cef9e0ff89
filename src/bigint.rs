//! Signed arbitrary-precision integer.
//!
//! A [`BigInt`] is a sign flag plus an unsigned magnitude; every signed
//! operation resolves the sign algebraically and hands the magnitudes to the
//! unsigned kernel in [`crate::limb`]. Values are immutable once built, and
//! every constructor funnels through one canonicalizing path, so a magnitude
//! never carries a leading zero limb and zero is never negative.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::decimal;
use crate::error::Error;
use crate::limb;

/// A signed arbitrary-precision integer in sign-magnitude form.
///
/// The magnitude is little-endian: limb 0 is least significant. Arithmetic
/// borrows its operands and returns freshly allocated results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    /// Little-endian limbs with no trailing zero; empty means zero.
    magnitude: Vec<u32>,
    /// Sign flag; always `false` when the magnitude is empty.
    negative: bool,
}

impl BigInt {
    /// Build a value from a possibly unnormalized magnitude, stripping
    /// trailing zero limbs and clearing the sign of zero.
    fn canonical(mut magnitude: Vec<u32>, negative: bool) -> Self {
        while magnitude.last() == Some(&0) {
            magnitude.pop();
        }
        BigInt {
            negative: negative && !magnitude.is_empty(),
            magnitude,
        }
    }

    /// Create a value from little-endian limbs and a sign flag.
    ///
    /// Trailing zero limbs are stripped; a zero magnitude ignores the sign.
    pub fn from_limbs(limbs: &[u32], negative: bool) -> Self {
        Self::canonical(limbs.to_vec(), negative)
    }

    /// Parse a decimal numeral matching `[-]?[0-9]+`.
    ///
    /// A bare `-`, an empty string, whitespace, or a leading `+` are all
    /// rejected with [`Error::InvalidNumeral`].
    pub fn from_decimal(input: &str) -> Result<Self, Error> {
        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let magnitude = decimal::parse_magnitude(digits)?;
        Ok(Self::canonical(magnitude, negative))
    }

    /// The little-endian limbs of the magnitude (no trailing zero).
    pub fn limbs(&self) -> &[u32] {
        &self.magnitude
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        BigInt {
            magnitude: self.magnitude.clone(),
            negative: false,
        }
    }

    /// Upper bound on the characters produced by
    /// [`to_decimal_string`](Self::to_decimal_string), including the sign.
    ///
    /// Ten decimal digits per limb, one more for `-`; zero needs one.
    pub fn max_decimal_len(&self) -> usize {
        if self.magnitude.is_empty() {
            return 1;
        }
        self.magnitude.len() * 10 + usize::from(self.negative)
    }

    /// Render the value in decimal.
    pub fn to_decimal_string(&self) -> String {
        let mut out = String::with_capacity(self.max_decimal_len());
        if self.negative {
            out.push('-');
        }
        decimal::write_magnitude(&self.magnitude, &mut out);
        debug_assert!(out.len() <= self.max_decimal_len());
        out
    }

    /// Quotient of `self / divisor`, truncated toward zero.
    ///
    /// The quotient sign is the xor of the operand signs; a zero divisor is
    /// [`Error::DivisionByZero`].
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.magnitude.len() < divisor.magnitude.len() {
            return Ok(BigInt::zero());
        }

        let (quotient, _) = limb::div_rem(&self.magnitude, &divisor.magnitude);
        Ok(Self::canonical(quotient, self.negative != divisor.negative))
    }

    /// Remainder of `self / divisor` under truncating division.
    ///
    /// The remainder takes the dividend's sign (or is zero), so that
    /// `self = q·divisor + r` with `|r| < |divisor|`.
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.magnitude.len() < divisor.magnitude.len() {
            return Ok(Self::canonical(self.magnitude.clone(), self.negative));
        }

        let (_, remainder) = limb::div_rem(&self.magnitude, &divisor.magnitude);
        Ok(Self::canonical(remainder, self.negative))
    }

    /// `|x| + |y|`, non-negative.
    fn add_magnitudes(x: &[u32], y: &[u32]) -> BigInt {
        if x.len() < y.len() {
            return Self::add_magnitudes(y, x);
        }

        let mut padded = y.to_vec();
        padded.resize(x.len(), 0);

        let mut sum = vec![0u32; x.len() + 1];
        limb::add(x, &padded, &mut sum);
        Self::canonical(sum, false)
    }

    /// `|x| - |y|` as a signed value: negative when `|x| < |y|`.
    fn sub_magnitudes(x: &[u32], y: &[u32]) -> BigInt {
        if limb::cmp_slices(x, y) == Ordering::Less {
            // x - y = -(y - x), and y - x is strictly positive here.
            let mut diff = Self::sub_magnitudes(y, x);
            diff.negative = true;
            return diff;
        }

        let mut padded = y.to_vec();
        padded.resize(x.len(), 0);

        let mut diff = vec![0u32; x.len()];
        limb::sub(x, &padded, &mut diff);
        Self::canonical(diff, false)
    }

    fn add_signed(&self, other: &BigInt) -> BigInt {
        match (self.negative, other.negative) {
            // (-x) + (-y) = -(x + y); both operands are non-zero.
            (true, true) => {
                let mut sum = Self::add_magnitudes(&self.magnitude, &other.magnitude);
                sum.negative = true;
                sum
            }
            // (-x) + y = y - x
            (true, false) => Self::sub_magnitudes(&other.magnitude, &self.magnitude),
            // x + (-y) = x - y
            (false, true) => Self::sub_magnitudes(&self.magnitude, &other.magnitude),
            (false, false) => Self::add_magnitudes(&self.magnitude, &other.magnitude),
        }
    }

    fn sub_signed(&self, other: &BigInt) -> BigInt {
        match (self.negative, other.negative) {
            // (-x) - (-y) = y - x
            (true, true) => Self::sub_magnitudes(&other.magnitude, &self.magnitude),
            // (-x) - y = -(x + y)
            (true, false) => {
                let mut sum = Self::add_magnitudes(&self.magnitude, &other.magnitude);
                sum.negative = true;
                sum
            }
            // x - (-y) = x + y
            (false, true) => Self::add_magnitudes(&self.magnitude, &other.magnitude),
            (false, false) => Self::sub_magnitudes(&self.magnitude, &other.magnitude),
        }
    }

    fn mul_signed(&self, other: &BigInt) -> BigInt {
        let mut product = vec![0u32; self.magnitude.len() + other.magnitude.len()];
        limb::mul(&self.magnitude, &other.magnitude, &mut product);
        Self::canonical(product, self.negative != other.negative)
    }

    fn neg_signed(&self) -> BigInt {
        Self::canonical(self.magnitude.clone(), !self.negative)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => limb::cmp_slices(&self.magnitude, &other.magnitude),
            // Both negative: the larger magnitude is the smaller value.
            (true, true) => limb::cmp_slices(&other.magnitude, &self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_decimal(s)
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::canonical(vec![value], false)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::canonical(vec![value as u32, (value >> 32) as u32], false)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::canonical(vec![value.unsigned_abs()], value < 0)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let magnitude = value.unsigned_abs();
        Self::canonical(
            vec![magnitude as u32, (magnitude >> 32) as u32],
            value < 0,
        )
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        self.add_signed(rhs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        self.add_signed(&rhs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self.sub_signed(rhs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        self.sub_signed(&rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        self.mul_signed(rhs)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        self.mul_signed(&rhs)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.neg_signed()
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.neg_signed()
    }
}

/// Truncating division.
///
/// # Panics
///
/// Panics on a zero divisor; use [`BigInt::checked_div`] to handle that case.
impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("division by zero"),
        }
    }
}

/// Truncating division.
///
/// # Panics
///
/// Panics on a zero divisor; use [`BigInt::checked_div`] to handle that case.
impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: BigInt) -> BigInt {
        &self / &rhs
    }
}

/// Remainder of truncating division.
///
/// # Panics
///
/// Panics on a zero divisor; use [`BigInt::checked_rem`] to handle that case.
impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(_) => panic!("division by zero"),
        }
    }
}

/// Remainder of truncating division.
///
/// # Panics
///
/// Panics on a zero divisor; use [`BigInt::checked_rem`] to handle that case.
impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: BigInt) -> BigInt {
        &self % &rhs
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt {
            magnitude: Vec::new(),
            negative: false,
        }
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt {
            magnitude: vec![1],
            negative: false,
        }
    }
}
