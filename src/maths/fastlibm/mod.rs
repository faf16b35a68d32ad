//! Stepping primitives for IEEE-754 binary64.
//!
//! `nextafter` walks the ordinal scale of doubles directly on the bit
//! pattern. `nextafter_portable` reaches the same neighbour arithmetically
//! through `frexp`/`ldexp`, and the two are kept bit-identical by the test
//! suite. Everything here is total over all 2^64 inputs.

#![allow(clippy::unusual_byte_groupings)]

mod classify;
mod copysign;
mod nextafter;
mod portable;
mod scaling;

pub use classify::{fpclassify, isfinite, isinf, isnan, signbit};
pub use copysign::{copysign, fabs};
pub use nextafter::{nextafter, nextdown, nexttoward, nextup};
pub use portable::nextafter_portable;
pub use scaling::{frexp, ldexp, scalbn};

// ========= bit layout =========

const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;
const EXP_MASK: u64 = 0x7ff0_0000_0000_0000u64;
const MANT_MASK: u64 = 0x000f_ffff_ffff_ffffu64;

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn get_exp_bits(u: u64) -> i32 {
    ((u >> 52) & 0x7ff) as i32
}

/// Magnitude bits: the position of `|x|` on the ordinal scale.
#[inline(always)]
fn abs_bits(u: u64) -> u64 {
    u & !SIGN_MASK
}

#[inline(always)]
fn is_nan_bits(u: u64) -> bool {
    (u & EXP_MASK) == EXP_MASK && (u & MANT_MASK) != 0
}
#[inline(always)]
fn is_inf_bits(u: u64) -> bool {
    abs_bits(u) == EXP_MASK
}
