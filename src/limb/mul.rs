//! Schoolbook multiplication.

/// Multiply the m-limb `u` by the n-limb `v` into the (m + n)-limb `w`.
///
/// Classic long multiplication: for each digit of `v`, accumulate the
/// partial products of `u` into `w` while carrying one limb. Zero digits of
/// `v` skip the inner loop and only write their carry slot. `w` is zeroed
/// through index `m - 1` here; the higher limbs are fully overwritten.
pub fn mul(u: &[u32], v: &[u32], w: &mut [u32]) {
    let m = u.len();
    let n = v.len();
    debug_assert_eq!(w.len(), m + n);

    w[..m].fill(0);

    for j in 0..n {
        if v[j] == 0 {
            w[j + m] = 0;
            continue;
        }

        let mut carry = 0u32;
        for i in 0..m {
            let prod = u64::from(u[i]) * u64::from(v[j]);
            let (hi, lo) = ((prod >> 32) as u32, prod as u32);

            let (lo, carry_a) = lo.overflowing_add(carry);
            let (sum, carry_b) = w[i + j].overflowing_add(lo);
            w[i + j] = sum;

            carry = hi + u32::from(carry_a) + u32::from(carry_b);
            debug_assert!(carry >= hi);
        }

        w[j + m] = carry;
    }
}

/// Multiply `u` by the scalar `x` and add `y`, in one fused pass.
///
/// Extends `u` by one limb when the final carry is non-zero. This is the
/// workhorse of decimal parsing, where `x` is a power of ten and `y` the
/// next digit chunk.
pub fn mul_add_scalar(u: &mut Vec<u32>, x: u32, y: u32) {
    let mut carry = y;
    for limb in u.iter_mut() {
        let prod = u64::from(*limb) * u64::from(x);
        let (hi, lo) = ((prod >> 32) as u32, prod as u32);

        let (lo, overflow) = lo.overflowing_add(carry);
        carry = hi + u32::from(overflow);
        *limb = lo;
    }

    if carry != 0 {
        u.push(carry);
    }
}
