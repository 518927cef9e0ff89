//! Randomized cross-checks of the arithmetic core.
//!
//! Small random operands are checked against `i128` arithmetic; larger ones
//! against the algebraic laws and the division identity, which need no
//! external oracle.

use rand::Rng;

use crate::bigint::BigInt;

/// A random value of up to `max_limbs` limbs, either sign.
fn random_bigint<R: Rng>(rng: &mut R, max_limbs: usize) -> BigInt {
    let len = rng.gen_range(0..=max_limbs);
    let limbs: Vec<u32> = (0..len).map(|_| rng.gen()).collect();
    BigInt::from_limbs(&limbs, rng.gen())
}

/// A random non-zero value of exactly `limbs` limbs with the requested top
/// half-limb regime: normalized tops have bit 15 of the upper half set.
fn random_divisor<R: Rng>(rng: &mut R, limbs: usize, normalized_top: bool) -> BigInt {
    let mut magnitude: Vec<u32> = (0..limbs).map(|_| rng.gen()).collect();
    let top = magnitude.last_mut().expect("at least one limb");
    if normalized_top {
        *top |= 0x8000_0000;
    } else {
        // Keep the upper half non-zero but below 0x8000, so the division
        // normalization step must shift.
        *top = (*top & 0x7FFF_FFFF) | 0x0001_0000;
    }
    BigInt::from_limbs(&magnitude, rng.gen())
}

fn check_canonical(x: &BigInt) {
    assert_ne!(x.limbs().last(), Some(&0));
    if x.limbs().is_empty() {
        assert!(!x.is_negative());
    }
}

#[test]
fn test_i128_oracle() {
    let mut rng = rand::thread_rng();
    for _ in 0..2000 {
        let a: i64 = rng.gen();
        let b: i64 = rng.gen();
        let (x, y) = (BigInt::from(a), BigInt::from(b));

        assert_eq!(
            (&x + &y).to_decimal_string(),
            (i128::from(a) + i128::from(b)).to_string()
        );
        assert_eq!(
            (&x - &y).to_decimal_string(),
            (i128::from(a) - i128::from(b)).to_string()
        );
        assert_eq!(
            (&x * &y).to_decimal_string(),
            (i128::from(a) * i128::from(b)).to_string()
        );
        assert_eq!(x.cmp(&y), a.cmp(&b));

        if b != 0 {
            assert_eq!(
                (&x / &y).to_decimal_string(),
                (i128::from(a) / i128::from(b)).to_string()
            );
            assert_eq!(
                (&x % &y).to_decimal_string(),
                (i128::from(a) % i128::from(b)).to_string()
            );
        }
    }
}

#[test]
fn test_canonical_form() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let x = random_bigint(&mut rng, 6);
        let y = random_bigint(&mut rng, 6);
        check_canonical(&x);
        check_canonical(&(&x + &y));
        check_canonical(&(&x - &y));
        check_canonical(&(&x * &y));
        check_canonical(&(-&x));
        if !y.is_zero() {
            check_canonical(&(&x / &y));
            check_canonical(&(&x % &y));
        }
    }
}

#[test]
fn test_addition_laws() {
    let mut rng = rand::thread_rng();
    let zero = BigInt::from_limbs(&[], false);
    for _ in 0..500 {
        let x = random_bigint(&mut rng, 8);
        let y = random_bigint(&mut rng, 8);
        let z = random_bigint(&mut rng, 8);

        assert_eq!(&x + &y, &y + &x);
        assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
        assert_eq!(&x + &zero, x);

        let cancel = &x + &(-&x);
        assert!(cancel.is_zero());
        assert!(!cancel.is_negative());

        assert_eq!(&x - &y, &x + &(-&y));
        assert!((&x - &x).is_zero());
    }
}

#[test]
fn test_multiplication_laws() {
    let mut rng = rand::thread_rng();
    let one = BigInt::from_limbs(&[1], false);
    let zero = BigInt::from_limbs(&[], false);
    for _ in 0..300 {
        let x = random_bigint(&mut rng, 5);
        let y = random_bigint(&mut rng, 5);
        let z = random_bigint(&mut rng, 5);

        assert_eq!(&x * &y, &y * &x);
        assert_eq!(&(&x * &y) * &z, &x * &(&y * &z));
        assert_eq!(&x * &(&y + &z), &(&x * &y) + &(&x * &z));
        assert_eq!(&x * &one, x);
        assert_eq!(&x * &zero, zero);
        assert_eq!(&(-&x) * &y, -&(&x * &y));
    }
}

#[test]
fn test_division_identity() {
    let mut rng = rand::thread_rng();
    for round in 0..1000 {
        let x = random_bigint(&mut rng, 8);
        // Alternate between divisors whose top half-limb is already
        // normalized and ones that force a non-zero shift.
        let divisor_limbs = rng.gen_range(1..=4);
        let y = random_divisor(&mut rng, divisor_limbs, round % 2 == 0);

        let q = x.checked_div(&y).expect("non-zero divisor");
        let r = x.checked_rem(&y).expect("non-zero divisor");

        assert_eq!(&(&q * &y) + &r, x);
        assert!(r.abs() < y.abs());
        if !r.is_zero() {
            assert_eq!(r.is_negative(), x.is_negative());
        } else {
            assert!(!r.is_negative());
        }
    }
}

#[test]
fn test_cmp_matches_sub() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let x = random_bigint(&mut rng, 6);
        let y = random_bigint(&mut rng, 6);

        let diff = &x - &y;
        let expected = if diff.is_zero() {
            std::cmp::Ordering::Equal
        } else if diff.is_negative() {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Greater
        };
        assert_eq!(x.cmp(&y), expected);
        assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
    }
}

#[test]
fn test_decimal_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        // Random digit string without a leading zero, optional sign.
        let len = rng.gen_range(1..60);
        let mut s = String::new();
        if rng.gen() {
            s.push('-');
        }
        // A non-zero lead digit keeps the string canonical ("-0" is not).
        s.push(char::from(b'0' + rng.gen_range(1..10u8)));
        for _ in 1..len {
            s.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }

        let value = BigInt::from_decimal(&s).expect("valid numeral");
        assert_eq!(value.to_decimal_string(), s);
    }
}
