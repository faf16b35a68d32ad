use super::{SIGN_MASK, abs_bits, f64_from_bits, f64_to_bits, is_nan_bits};

/// Next representable double after `x` in the direction of `y`.
///
/// * NaN in either argument returns NaN.
/// * `x == y` returns `y`, so `nextafter(-0.0, 0.0)` is `+0.0`.
/// * From either zero the result is the smallest subnormal with `y`'s sign.
/// * `±inf` steps inward to `±f64::MAX`; `±f64::MAX` steps outward to `±inf`.
/// * Stepping a smallest subnormal toward zero yields a zero that keeps the
///   sign of `x`.
#[inline(always)]
pub fn nextafter(x: f64, y: f64) -> f64 {
    let ux = f64_to_bits(x);
    let uy = f64_to_bits(y);
    if is_nan_bits(ux) || is_nan_bits(uy) {
        return f64::NAN;
    }
    if x == y {
        return y;
    }
    let sx = ux & SIGN_MASK;
    let ax = abs_bits(ux);
    if ax == 0 {
        return f64_from_bits((uy & SIGN_MASK) | 1);
    }
    // Magnitude grows away from zero on both halves of the sign split, and
    // ax >= 1 here, so the walk stays inside the sign domain of x. Reaching
    // ax == 0 lands on the zero of that same sign.
    let away_from_zero = (x < y) == (sx == 0);
    let ax = if away_from_zero { ax + 1 } else { ax - 1 };
    f64_from_bits(sx | ax)
}

/// `nexttoward` with a binary64 direction.
///
/// The C signature widens `y` to `long double`; with only binary64 in play
/// the comparison against `x` is exact either way, so this is `nextafter`.
#[inline(always)]
pub fn nexttoward(x: f64, y: f64) -> f64 {
    nextafter(x, y)
}

/// Least double greater than `x` (IEEE-754 `nextUp`).
#[inline(always)]
pub fn nextup(x: f64) -> f64 {
    nextafter(x, f64::INFINITY)
}

/// Greatest double less than `x` (IEEE-754 `nextDown`).
#[inline(always)]
pub fn nextdown(x: f64) -> f64 {
    nextafter(x, f64::NEG_INFINITY)
}
