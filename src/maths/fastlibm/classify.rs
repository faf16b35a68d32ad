use core::num::FpCategory;

use super::{EXP_MASK, MANT_MASK, f64_to_bits, get_exp_bits, is_inf_bits, is_nan_bits};

#[inline(always)]
pub fn isfinite(x: f64) -> bool {
    (f64_to_bits(x) & EXP_MASK) != EXP_MASK
}

#[inline(always)]
pub fn isinf(x: f64) -> bool {
    is_inf_bits(f64_to_bits(x))
}

#[inline(always)]
pub fn isnan(x: f64) -> bool {
    is_nan_bits(f64_to_bits(x))
}

/// Sign bit as stored, so `signbit(-0.0)` and `signbit(-NaN)` are both set.
#[inline(always)]
pub fn signbit(x: f64) -> bool {
    (f64_to_bits(x) >> 63) != 0
}

#[inline(always)]
pub fn fpclassify(x: f64) -> FpCategory {
    let u = f64_to_bits(x);
    match (get_exp_bits(u), u & MANT_MASK) {
        (0x7ff, 0) => FpCategory::Infinite,
        (0x7ff, _) => FpCategory::Nan,
        (0, 0) => FpCategory::Zero,
        (0, _) => FpCategory::Subnormal,
        _ => FpCategory::Normal,
    }
}
