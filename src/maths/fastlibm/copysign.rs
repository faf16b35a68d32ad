//! Sign injection and absolute value on the raw sign bit.
//!
//! Both operate purely on storage, so signed zeros and NaN payloads pass
//! through untouched apart from bit 63.

use super::{SIGN_MASK, abs_bits, f64_from_bits, f64_to_bits};

#[inline(always)]
pub fn copysign(x: f64, y: f64) -> f64 {
    f64_from_bits(abs_bits(f64_to_bits(x)) | (f64_to_bits(y) & SIGN_MASK))
}

#[inline(always)]
pub fn fabs(x: f64) -> f64 {
    f64_from_bits(abs_bits(f64_to_bits(x)))
}
