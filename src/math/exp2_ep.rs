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
use crate::math::bits::{biased_exponent_f64, scalbn};
use crate::math::double_double::DoubleDouble;

/// 2^(n/16) for n in -8..=8 as `(lo, hi)`
static EXP2_CORRECTIONS: [(u64, u64); 17] = [
    (0xbc8bdd3413b26456, 0x3fe6a09e667f3bcd),
    (0xbc741577ee04992f, 0x3fe7a11473eb0187),
    (0x3c86e9f156864b27, 0x3fe8ace5422aa0db),
    (0x3c6c7c46b071f2be, 0x3fe9c49182a3f090),
    (0x3c87a1cd345dcc81, 0x3feae89f995ad3ad),
    (0x3c711065895048dd, 0x3fec199bdd85529c),
    (0x3c72ed02d75b3707, 0x3fed5818dcfba487),
    (0xbc8e9c23179c2893, 0x3feea4afa2a490da),
    (0x0000000000000000, 0x3ff0000000000000),
    (0x3c98a62e4adc610b, 0x3ff0b5586cf9890f),
    (0xbc819041b9d78a76, 0x3ff172b83c7d517b),
    (0x3c99b07eb6c70573, 0x3ff2387a6e756238),
    (0x3c86f46ad23182e4, 0x3ff306fe0a31b715),
    (0x3c8ada0911f09ebc, 0x3ff3dea64c123422),
    (0x3c7d4397afec42e2, 0x3ff4bfdad5362a27),
    (0x3c96324c054647ad, 0x3ff5ab07dd485429),
    (0xbc9bdd3413b26456, 0x3ff6a09e667f3bcd),
];

/// Minimax fit of (2^x - 1)/x on [-1/32, 1/32], max error about 2^-86
static EXP2_POLY: [(u64, u64); 9] = [
    (0x3c7abc9e3ac1d244, 0x3fe62e42fefa39ef),
    (0xbc65e4987a631846, 0x3fcebfbdff82c58f),
    (0xbc4d323200a05713, 0x3fac6b08d704a0c0),
    (0x3c0c5ee8f8b9f0c1, 0x3f83b2ab6fba4e7a),
    (0x3bf884e5e5cc7ecc, 0x3f55d87fe78a672a),
    (0x3bc4f1b59514a326, 0x3f2430912f7e8373),
    (0xbb8db7d6a0953b78, 0x3eeffcbfc5985e71),
    (0x3afe0767c2d7abf5, 0x3eb62c150eb16465),
    (0x3b16797523f944bc, 0x3e7b52502b5e9530),
];

/// 2^x for a double-double exponent.
///
/// Results beyond 2^1025 saturate to +Inf and below 2^-1099 to +0.
/// When the result lands in the subnormal range of double, it is rounded
/// once from a round-to-odd intermediate.
pub fn exp2_extended(x: DoubleDouble) -> DoubleDouble {
    if x.hi.is_nan() {
        return DoubleDouble::from_f64(x.hi);
    }
    if x.hi >= 1025. {
        return DoubleDouble::from_f64(f64::INFINITY);
    }
    if x.hi < -1075. - 24. {
        return DoubleDouble::from_f64(0.);
    }

    let i = x.hi.round_ties_even();
    let mut hi = x.hi - i;

    // [-0.5, 0.5] -> [-1/32, 1/32] through the 2^(n/16) table
    let index = (hi * 16.).round_ties_even();
    hi -= index * 0.0625;
    let reduced = DoubleDouble::from_exact_add(hi, x.lo);

    let mut r = DoubleDouble::from_bit_pair(EXP2_POLY[EXP2_POLY.len() - 1]);
    for &c in EXP2_POLY.iter().rev().skip(1) {
        r = DoubleDouble::add_dd(
            DoubleDouble::from_bit_pair(c),
            DoubleDouble::mul_dd(r, reduced),
        );
    }
    // r = 2^x - 1
    r = DoubleDouble::mul_dd(r, reduced);

    let correction = DoubleDouble::from_bit_pair(EXP2_CORRECTIONS[(index as i32 + 8) as usize]);
    r = DoubleDouble::mul_dd(r, correction);
    r = DoubleDouble::add_dd(r, correction);

    let i = i as i32;
    let exponent = biased_exponent_f64(r.hi) as i32 - 1023 + i;
    if exponent < -1022 {
        return DoubleDouble::from_f64(scalbn(r.to_f64_odd(), i));
    }
    r.ldexp(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::log2_ep::log2_extended;
    use rand::Rng;

    #[test]
    fn test_exp2_integers() {
        for e in -1074..1024 {
            let r = exp2_extended(DoubleDouble::from_f64(e as f64));
            let expected = f64::from_bits(if e < -1022 {
                1u64 << (e + 1074)
            } else {
                ((e + 1023) as u64) << 52
            });
            assert_eq!(r.hi, expected, "Invalid exp2 of {e}");
            assert_eq!(r.lo, 0., "Invalid exp2 low part of {e}");
        }
    }

    #[test]
    fn test_exp2_saturation() {
        assert_eq!(exp2_extended(DoubleDouble::from_f64(1025.)).hi, f64::INFINITY);
        assert_eq!(exp2_extended(DoubleDouble::from_f64(1e300)).hi, f64::INFINITY);
        assert_eq!(exp2_extended(DoubleDouble::from_f64(-1100.)).hi, 0.);
        assert_eq!(exp2_extended(DoubleDouble::from_f64(f64::NEG_INFINITY)).hi, 0.);
        assert!(exp2_extended(DoubleDouble::from_f64(f64::NAN)).hi.is_nan());
        assert_eq!(exp2_extended(DoubleDouble::from_f64(0.)).hi, 1.);
    }

    #[test]
    fn test_exp2_against_double() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let x: f64 = rng.random_range(-1000.0..1000.0);
            let r = exp2_extended(DoubleDouble::from_f64(x));
            let expected = x.exp2();
            let err = (r.to_f64() - expected).abs();
            assert!(
                err <= expected * f64::EPSILON,
                "Invalid exp2 of {x}: {:?} vs {expected}",
                r
            );
        }
    }

    #[test]
    fn test_log2_exp2_round_trip() {
        let mut rng = rand::rng();
        // 2^-74
        let bound = f64::from_bits(0x3b50000000000000);
        for _ in 0..20000 {
            let e: i32 = rng.random_range(-1000..1000);
            let m: f64 = rng.random_range(1.0..2.0);
            let x = scalbn(m, e);
            let r = exp2_extended(log2_extended(x));
            let rel = ((r.hi - x) + r.lo) / x;
            assert!(rel.abs() < bound, "Invalid round trip for {x}: {:?}, {rel}", r);
        }
    }
}
