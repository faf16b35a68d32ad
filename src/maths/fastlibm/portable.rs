//! nextafter without touching the bit layout of its arguments.
//!
//! The neighbour is found arithmetically: split `x` into a mantissa in
//! `[0.5, 1)` and an exponent, add one mantissa ulp in the direction of `y`,
//! and scale back. Only `frexp`, `ldexp` and ordinary comparisons are used,
//! so this serves as an independent check on the ordinal walk in
//! `nextafter`.

use super::{copysign, frexp, isinf, isnan, ldexp};

const MIN_EXP: i32 = f64::MIN_EXP; // -1021
const MANT_DIG: i32 = f64::MANTISSA_DIGITS as i32; // 53
const HALF_EPSILON: f64 = f64::EPSILON / 2.0; // 2^-53, one ulp of a frexp mantissa

#[inline]
pub fn nextafter_portable(x: f64, y: f64) -> f64 {
    if isnan(x) || isnan(y) {
        return f64::NAN;
    }
    if x == y {
        return y;
    }
    if x == 0.0 {
        let tiny = ldexp(0.5, MIN_EXP - MANT_DIG + 1);
        return if 0.0 < y { tiny } else { -tiny };
    }
    if isinf(x) {
        return copysign(f64::MAX, x);
    }
    if isinf(y) && ((x == f64::MAX && 0.0 < y) || (x == -f64::MAX && y < 0.0)) {
        return y;
    }

    let (mut m, mut e) = frexp(x);
    let mut d = if x < y { HALF_EPSILON } else { -HALF_EPSILON };
    // Below a power of two the spacing halves: step from 2 * m at e - 1.
    if (x < y && m == -0.5) || (x > y && m == 0.5) {
        m *= 2.0;
        e -= 1;
    }
    // Subnormal spacing is fixed at 2^(MIN_EXP - MANT_DIG).
    if e < MIN_EXP {
        d = ldexp(d, MIN_EXP - e);
    }
    let m2 = m + d;
    if m2 == 0.0 {
        return if m < 0.0 { -0.0 } else { 0.0 };
    }
    ldexp(m2, e)
}
