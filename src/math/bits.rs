/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Named accessors over the IEEE-754 layout of `f64`, `f32` and binary16.

pub(crate) const F64_SIGN_MASK: u64 = 1 << 63;
pub(crate) const F64_EXPONENT_MASK: u64 = 0x7ff0_0000_0000_0000;
pub(crate) const F64_MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
pub(crate) const F64_EXPONENT_BIAS: i32 = 1023;

/// ilogb(0), matches the C `FP_ILOGB0` commonly used by OpenCL devices
pub const FP_ILOGB0: i32 = i32::MIN;
/// ilogb(NaN)
pub const FP_ILOGBNAN: i32 = i32::MAX;

#[inline]
pub const fn sign_bit_f64(x: f64) -> bool {
    x.to_bits() & F64_SIGN_MASK != 0
}

/// Biased exponent field
#[inline]
pub const fn biased_exponent_f64(x: f64) -> u32 {
    ((x.to_bits() & F64_EXPONENT_MASK) >> 52) as u32
}

/// Stored mantissa field, without the implicit bit
#[inline]
pub const fn mantissa_f64(x: f64) -> u64 {
    x.to_bits() & F64_MANTISSA_MASK
}

#[inline]
pub const fn biased_exponent_f32(x: f32) -> u32 {
    (x.to_bits() >> 23) & 0xff
}

#[inline]
pub const fn mantissa_f32(x: f32) -> u32 {
    x.to_bits() & 0x007f_ffff
}

/// Computes 2^n for normal exponents
#[inline(always)]
pub(crate) const fn pow2i(n: i32) -> f64 {
    f64::from_bits(((n + F64_EXPONENT_BIAS) as u64) << 52)
}

/// Splits `x` into a fraction in [0.5, 1) and a power of two.
///
/// Zero, infinities and NaN are returned unchanged with exponent 0.
pub fn frexp(x: f64) -> (f64, i32) {
    if x == 0. || !x.is_finite() {
        return (x, 0);
    }
    let mut v = x;
    let mut bias = 0i32;
    if biased_exponent_f64(v) == 0 {
        // 2^54
        v *= f64::from_bits(0x4350000000000000);
        bias = 54;
    }
    let e = biased_exponent_f64(v) as i32;
    let fraction = f64::from_bits((v.to_bits() & !F64_EXPONENT_MASK) | 0x3fe0_0000_0000_0000);
    (fraction, e - 1022 - bias)
}

/// Unbiased exponent of `x`, subnormals included.
pub const fn ilogb(x: f64) -> i32 {
    if x.is_nan() {
        return FP_ILOGBNAN;
    }
    if x.is_infinite() {
        return i32::MAX;
    }
    if x == 0. {
        return FP_ILOGB0;
    }
    let e = biased_exponent_f64(x) as i32;
    if e == 0 {
        let m = mantissa_f64(x);
        // position of the leading one among the 52 stored bits
        return -1011 - m.leading_zeros() as i32;
    }
    e - F64_EXPONENT_BIAS
}

/// Scales `x` by 2^n with a single rounding, even when the result is subnormal.
pub fn scalbn(x: f64, n: i32) -> f64 {
    // 2^1023, 2^-1022 * 2^53
    const HUGE: f64 = f64::from_bits(0x7fe0000000000000);
    const TINY: f64 = f64::from_bits(0x0360000000000000);
    let mut y = x;
    let mut n = n;
    if n > 1023 {
        y *= HUGE;
        n -= 1023;
        if n > 1023 {
            y *= HUGE;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        y *= TINY;
        n += 1022 - 53;
        if n < -1022 {
            y *= TINY;
            n += 1022 - 53;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    y * pow2i(n)
}

#[inline]
pub const fn is_subnormal_f64(x: f64) -> bool {
    biased_exponent_f64(x) == 0 && mantissa_f64(x) != 0
}

#[inline]
pub const fn is_subnormal_f32(x: f32) -> bool {
    biased_exponent_f32(x) == 0 && mantissa_f32(x) != 0
}

/// `true` when `x` lies strictly between zero and the smallest normal binary16 value
#[inline]
pub fn is_subnormal_f16(x: f64) -> bool {
    x != 0. && x.abs() < f64::from_bits(0x3f10000000000000)
}

/// Next representable value after `x` moving toward zero, for finite nonzero `x`
#[inline]
pub(crate) const fn step_toward_zero_f64(x: f64) -> f64 {
    f64::from_bits(x.to_bits() - 1)
}

#[inline]
pub(crate) const fn step_toward_zero_f32(x: f32) -> f32 {
    f32::from_bits(x.to_bits() - 1)
}

/// Widens binary16 bits to `f32`, exactly.
pub const fn f16_to_f32(h: u16) -> f32 {
    let sign = ((h & 0x8000) as u32) << 16;
    let exp = ((h >> 10) & 0x1f) as u32;
    let man = (h & 0x3ff) as u32;
    if exp == 0x1f {
        return f32::from_bits(sign | 0x7f80_0000 | (man << 13));
    }
    if exp == 0 {
        // man * 2^-24
        let v = man as f32 * f32::from_bits(0x3380_0000);
        return if sign != 0 { -v } else { v };
    }
    f32::from_bits(sign | ((exp + 112) << 23) | (man << 13))
}

/// Rounds an `f64` to binary16 bits, to nearest-even or toward zero.
pub const fn f64_to_f16_bits(x: f64, toward_zero: bool) -> u16 {
    let bits = x.to_bits();
    let sign = ((bits >> 48) & 0x8000) as u16;
    let abs = bits & !F64_SIGN_MASK;
    if abs > F64_EXPONENT_MASK {
        // keep the top payload bits, force quiet
        return sign | 0x7e00 | ((abs >> 42) & 0x1ff) as u16;
    }
    if abs == F64_EXPONENT_MASK {
        return sign | 0x7c00;
    }
    let exp = ((abs >> 52) as i32) - F64_EXPONENT_BIAS;
    if exp > 15 {
        return if toward_zero { sign | 0x7bff } else { sign | 0x7c00 };
    }
    if exp < -25 || abs == 0 {
        return sign;
    }
    let m = (abs & F64_MANTISSA_MASK) | (1 << 52);
    let unit_exp = if exp < -14 { -14 } else { exp };
    let shift = (42 + unit_exp - exp) as u32;
    let mut q = m >> shift;
    if !toward_zero {
        let rem = m & ((1u64 << shift) - 1);
        let half = 1u64 << (shift - 1);
        if rem > half || (rem == half && (q & 1) == 1) {
            q += 1;
        }
    }
    let encoded = if exp >= -14 {
        (((exp + 14) as u64) << 10) + q
    } else {
        q
    };
    sign | encoded as u16
}

/// Rounds an `f32` to binary16 bits, to nearest-even.
#[inline]
pub const fn f32_to_f16(x: f32) -> u16 {
    f64_to_f16_bits(x as f64, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frexp() {
        assert_eq!(frexp(8.0), (0.5, 4));
        assert_eq!(frexp(-3.0), (-0.75, 2));
        assert_eq!(frexp(0.0), (0.0, 0));
        let (f, e) = frexp(f64::from_bits(1));
        assert_eq!(f, 0.5);
        assert_eq!(e, -1073);
        let (f, e) = frexp(f64::MAX);
        assert!(f < 1.0 && f >= 0.5);
        assert_eq!(e, 1024);
    }

    #[test]
    fn test_ilogb() {
        assert_eq!(ilogb(1.0), 0);
        assert_eq!(ilogb(0.75), -1);
        assert_eq!(ilogb(f64::from_bits(1)), -1074);
        assert_eq!(ilogb(f64::MIN_POSITIVE), -1022);
        assert_eq!(ilogb(f64::from_bits(0x000f_ffff_ffff_ffff)), -1023);
        assert_eq!(ilogb(0.0), FP_ILOGB0);
        assert_eq!(ilogb(f64::NAN), FP_ILOGBNAN);
    }

    #[test]
    fn test_scalbn() {
        assert_eq!(scalbn(1.0, 10), 1024.0);
        assert_eq!(scalbn(1.0, -1074), f64::from_bits(1));
        assert_eq!(scalbn(1.5, -1074), f64::from_bits(2));
        assert_eq!(scalbn(f64::MAX, -2046), scalbn(scalbn(f64::MAX, -1023), -1023));
        assert_eq!(scalbn(1.0, 2000), f64::INFINITY);
        assert_eq!(scalbn(f64::from_bits(1), 1074), 1.0);
    }

    #[test]
    fn test_subnormal_predicates() {
        assert!(is_subnormal_f32(f32::from_bits(1)));
        assert!(!is_subnormal_f32(f32::MIN_POSITIVE));
        assert!(!is_subnormal_f32(0.0));
        assert!(is_subnormal_f64(f64::from_bits(0x000f_ffff_ffff_ffff)));
        assert!(is_subnormal_f16(f16_to_f32(0x0001) as f64));
        assert!(!is_subnormal_f16(f16_to_f32(0x0400) as f64));
    }

    #[test]
    fn test_half_conversion() {
        assert_eq!(f16_to_f32(0x3c00), 1.0);
        assert_eq!(f16_to_f32(0xc000), -2.0);
        assert_eq!(f16_to_f32(0x7bff), 65504.0);
        assert_eq!(f16_to_f32(0x0001), 5.960464477539063e-8);
        assert!(f16_to_f32(0x7e00).is_nan());
        assert_eq!(f32_to_f16(1.0), 0x3c00);
        assert_eq!(f32_to_f16(65504.0), 0x7bff);
        assert_eq!(f32_to_f16(65520.0), 0x7c00);
        assert_eq!(f64_to_f16_bits(65520.0, true), 0x7bff);
        assert_eq!(f32_to_f16(5.960464477539063e-8), 0x0001);
        // exactly half of the smallest subnormal rounds to even zero
        assert_eq!(f32_to_f16(2.9802322387695312e-8), 0x0000);
        // 1 + 2^-11 is a tie, even is 1.0
        assert_eq!(f64_to_f16_bits(1.0 + 2f64.powi(-11), false), 0x3c00);
        assert_eq!(f64_to_f16_bits(1.0 + 3.0 * 2f64.powi(-11), false), 0x3c02);
        assert_eq!(f64_to_f16_bits(-1.0 - 3.0 * 2f64.powi(-11), true), 0xbc01);
        for h in 0u16..0x7c00 {
            let v = f16_to_f32(h);
            assert_eq!(f32_to_f16(v), h, "Invalid round trip for {h:#x}");
            assert_eq!(f32_to_f16(-v), h | 0x8000);
        }
    }
}
