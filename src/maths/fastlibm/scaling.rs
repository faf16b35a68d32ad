use super::{MANT_MASK, SIGN_MASK, f64_from_bits, f64_to_bits, get_exp_bits};

const TWO54: f64 = f64::from_bits(0x4350_0000_0000_0000u64); // 2^54
const TWO1023: f64 = f64::from_bits(0x7fe0_0000_0000_0000u64); // 2^1023
// 2^-1022 * 2^53: keeps the final factor below 2^-53 so a subnormal result
// is rounded once.
const TWOM969: f64 = f64::from_bits(0x0360_0000_0000_0000u64);

/// Splits `x` into `(m, e)` with `x == m * 2^e` and `0.5 <= |m| < 1`.
///
/// Zeros, infinities and NaN come back unchanged with `e == 0`.
#[inline(always)]
pub fn frexp(x: f64) -> (f64, i32) {
    let ux = f64_to_bits(x);
    let e = get_exp_bits(ux);
    if e == 0 {
        if x == 0.0 {
            return (x, 0);
        }
        let y = x * TWO54;
        let uy = f64_to_bits(y);
        let exp = get_exp_bits(uy) - 1022 - 54;
        let mant = (uy & (SIGN_MASK | MANT_MASK)) | (0x3feu64 << 52);
        return (f64_from_bits(mant), exp);
    }
    if e == 0x7ff {
        return (x, 0);
    }
    let mant = (ux & (SIGN_MASK | MANT_MASK)) | (0x3feu64 << 52);
    (f64_from_bits(mant), e - 1022)
}

#[inline(always)]
pub fn ldexp(x: f64, n: i32) -> f64 {
    scalbn(x, n)
}

/// `x * 2^n` with a single rounding, overflowing to `±inf` and underflowing
/// gradually through the subnormals.
#[inline(always)]
pub fn scalbn(x: f64, mut n: i32) -> f64 {
    let mut y = x;
    if n > 1023 {
        y *= TWO1023;
        n -= 1023;
        if n > 1023 {
            y *= TWO1023;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        y *= TWOM969;
        n += 1022 - 53;
        if n < -1022 {
            y *= TWOM969;
            n += 1022 - 53;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    y * f64_from_bits(((0x3ff + n) as u64) << 52)
}
