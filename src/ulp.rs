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
use crate::config::Precision;
use crate::math::bits::{
    F64_MANTISSA_MASK, ilogb, is_subnormal_f16, is_subnormal_f32, is_subnormal_f64, scalbn,
};
use crate::math::double_double::DoubleDouble;

// 2^128, first power of two above f32::MAX
const F32_OVERFLOW: f64 = f64::from_bits(0x47f0000000000000);
// 2^16, first power of two above the largest binary16 value
const F16_OVERFLOW: f64 = f64::from_bits(0x40f0000000000000);

/// Unbiased exponent of one ulp at `reference` in a format with `mantissa_bits`
/// explicit bits, zero and powers of two use the smaller ulp below them.
#[inline]
fn ulp_scale(reference: f64, power_of_two: bool, precision: Precision) -> i32 {
    let e = ilogb(reference);
    let e = if power_of_two { e.saturating_sub(1) } else { e };
    precision.mantissa_bits() - e.max(precision.min_exponent())
}

fn narrow_ulp_error(test: f64, reference: f64, precision: Precision, overflow: f64) -> f32 {
    if reference.to_bits() & F64_MANTISSA_MASK != 0 {
        if reference.is_nan() && test.is_nan() {
            return 0.;
        }
        return scalbn(test - reference, ulp_scale(reference, false, precision)) as f32;
    }
    if reference.is_infinite() {
        if test == reference {
            return 0.;
        }
        return (test - reference) as f32;
    }
    // premature overflow of a finite reference is measured against the next binade
    let test = if test.is_infinite() {
        overflow.copysign(test)
    } else {
        test
    };
    scalbn(test - reference, ulp_scale(reference, true, precision)) as f32
}

/// Signed error of an `f32` candidate in single precision ulps of `reference`.
///
/// Any NaN matches a NaN reference, an infinite candidate against a finite
/// reference counts as `±2^128`.
pub fn ulp_error_f32(test: f32, reference: f64) -> f32 {
    narrow_ulp_error(test as f64, reference, Precision::Single, F32_OVERFLOW)
}

/// Signed error of a binary16 candidate, passed widened, in half precision ulps.
pub fn ulp_error_f16(test: f64, reference: f64) -> f32 {
    narrow_ulp_error(test, reference, Precision::Half, F16_OVERFLOW)
}

/// Signed error of a double candidate in ulps of a double-double reference.
///
/// `double_only` marks references accurate only to half a double ulp, the
/// error is widened by that half ulp away from zero.
pub fn ulp_error_f64(test: f64, reference: DoubleDouble, double_only: bool) -> f32 {
    if reference.is_infinite() {
        return if test == reference.hi { 0. } else { f32::INFINITY };
    }
    if reference.is_nan() {
        return if test.is_nan() { 0. } else { f32::INFINITY };
    }
    if test == reference.hi && reference.lo == 0. {
        return 0.;
    }
    let power_of_two = reference.hi.to_bits() & F64_MANTISSA_MASK == 0
        && (reference.lo == 0. || (reference.lo > 0.) != (reference.hi > 0.));
    let scale = ulp_scale(reference.hi, power_of_two, Precision::Double);
    let difference = DoubleDouble::sub_dd(DoubleDouble::from_f64(test), reference);
    let mut error = difference.ldexp(scale).to_f64_nearest();
    if double_only {
        error += 0.5f64.copysign(error);
    }
    error as f32
}

/// `|test - reference|`, zero when both are NaN
pub fn abs_error(test: f64, reference: f64) -> f32 {
    if test.is_nan() && reference.is_nan() {
        return 0.;
    }
    (reference - test).abs() as f32
}

/// Signed ulp error of `test` against `reference` in `precision`
pub fn ulp_error(precision: Precision, test: f64, reference: DoubleDouble, double_only: bool) -> f32 {
    match precision {
        Precision::Half => ulp_error_f16(test, reference.to_f64_odd()),
        Precision::Single => ulp_error_f32(test as f32, reference.to_f64_odd()),
        Precision::Double => ulp_error_f64(test, reference, double_only),
    }
}

/// Smallest subnormal and smallest normal of a precision
const fn subnormal_bounds(precision: Precision) -> (f64, f64) {
    match precision {
        Precision::Half => (
            f64::from_bits(0x3e70000000000000),
            f64::from_bits(0x3f10000000000000),
        ),
        Precision::Single => (
            f64::from_bits(0x36a0000000000000),
            f64::from_bits(0x3810000000000000),
        ),
        Precision::Double => (f64::from_bits(1), f64::MIN_POSITIVE),
    }
}

/// A result within `ulps` of `x` could be subnormal in `precision`, and may flush.
pub fn is_result_subnormal(precision: Precision, x: f64, ulps: f32) -> bool {
    let (denorm_min, min_normal) = subnormal_bounds(precision);
    if x.is_nan() {
        return false;
    }
    x.abs() - ulps as f64 * denorm_min < min_normal
}

/// Same as [is_result_subnormal] with an absolute error bound
pub fn is_result_subnormal_abs(precision: Precision, x: f64, bound: f32) -> bool {
    let (_, min_normal) = subnormal_bounds(precision);
    if x.is_nan() {
        return false;
    }
    x.abs() - (bound as f64) < min_normal
}

/// Operand `x`, already exact in `precision`, is subnormal there
pub fn is_operand_subnormal(precision: Precision, x: f64) -> bool {
    match precision {
        Precision::Half => is_subnormal_f16(x),
        Precision::Single => is_subnormal_f32(x as f32),
        Precision::Double => is_subnormal_f64(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_ulp_error_f32() {
        assert_eq!(ulp_error_f32(1., 1.), 0.);
        let next = f32::from_bits(1f32.to_bits() + 1);
        // powers of two are measured in the ulp of the binade below
        assert_eq!(ulp_error_f32(next, 1.), 2.);
        let prev = f32::from_bits(1f32.to_bits() - 1);
        assert_eq!(ulp_error_f32(prev, 1.), -1.);
        assert_eq!(ulp_error_f32(1.5, 1.5 + 2f64.powi(-24)), -0.5);
        assert_eq!(ulp_error_f32(f32::NAN, f64::NAN), 0.);
        assert!(ulp_error_f32(1., f64::NAN).is_nan());
        assert_eq!(ulp_error_f32(f32::INFINITY, f64::INFINITY), 0.);
        assert_eq!(ulp_error_f32(f32::MAX, f64::INFINITY), f32::NEG_INFINITY);
        assert_eq!(ulp_error_f32(f32::INFINITY, 2f64.powi(128)), 0.);
        assert_eq!(ulp_error_f32(f32::MAX, 2f64.powi(128)), -1.);
        assert_eq!(ulp_error_f32(f32::from_bits(1), 0.), 1.);
    }

    #[test]
    fn test_ulp_error_f16() {
        assert_eq!(ulp_error_f16(1.5 + 2f64.powi(-10), 1.5), 1.);
        assert_eq!(ulp_error_f16(1. + 2f64.powi(-10), 1.), 2.);
        assert_eq!(ulp_error_f16(f64::NAN, f64::NAN), 0.);
        assert_eq!(ulp_error_f16(f64::INFINITY, 65536.), 0.);
        assert!(ulp_error_f16(f64::INFINITY, 65520.).is_infinite());
    }

    #[test]
    fn test_ulp_error_f64() {
        let r = DoubleDouble::new(2f64.powi(-60), 1.);
        assert_eq!(ulp_error_f64(1., r, false), -2f32.powi(-8));
        let next = f64::from_bits(1f64.to_bits() + 1);
        let error = ulp_error_f64(next, r, false);
        assert!((error - (1. - 2f32.powi(-8))).abs() < 1e-6, "Error {}", error);
        assert_eq!(ulp_error_f64(next, r, true), error + 0.5);
        assert_eq!(ulp_error_f64(3., DoubleDouble::from_f64(3.), true), 0.);
        // 1 - 2^-60 lives below the binade of its high part
        let below = DoubleDouble::new(-(2f64.powi(-60)), 1.);
        assert_eq!(ulp_error_f64(1., below, false), 2f32.powi(-7));
        assert_eq!(ulp_error_f64(f64::NAN, DoubleDouble::from_f64(f64::NAN), false), 0.);
        assert_eq!(ulp_error_f64(1., DoubleDouble::from_f64(f64::NAN), false), f32::INFINITY);
        assert_eq!(
            ulp_error_f64(f64::MAX, DoubleDouble::from_f64(f64::INFINITY), false),
            f32::INFINITY
        );
    }

    #[test]
    fn test_ulp_error_random() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let x = rng.random_range(-1e30f32..1e30f32);
            let steps = rng.random_range(-4i32..=4);
            let y = f32::from_bits((x.to_bits() as i32 + steps) as u32);
            let m = x.to_bits() & 0x7fffff;
            if !(8..0x7ffff0).contains(&m) {
                continue;
            }
            let error = ulp_error_f32(y, x as f64);
            assert!(
                (error.abs() - steps.abs() as f32).abs() < 1e-3,
                "{} vs {} gave {} ulp, expected {}",
                y,
                x,
                error,
                steps
            );
        }
    }

    #[test]
    fn test_abs_error() {
        assert_eq!(abs_error(1., 1.25), 0.25);
        assert_eq!(abs_error(f64::NAN, f64::NAN), 0.);
        assert!(abs_error(1., f64::NAN).is_nan());
    }

    #[test]
    fn test_subnormal_predicates() {
        let min_normal = f32::MIN_POSITIVE as f64;
        assert!(is_result_subnormal(Precision::Single, min_normal / 2., 0.));
        assert!(!is_result_subnormal(Precision::Single, min_normal, 0.));
        assert!(is_result_subnormal(Precision::Single, min_normal, 1.));
        assert!(!is_result_subnormal(Precision::Single, 1., 4.));
        assert!(!is_result_subnormal(Precision::Single, f64::NAN, 4.));
        assert!(is_result_subnormal_abs(Precision::Single, 1e-4, 2f32.powi(-11)));
        assert!(!is_result_subnormal_abs(Precision::Single, 1., 2f32.powi(-11)));
        assert!(is_result_subnormal(Precision::Half, 2f64.powi(-15), 0.));
        assert!(!is_result_subnormal(Precision::Half, 2f64.powi(-14), 0.));
        assert!(is_result_subnormal(Precision::Double, f64::MIN_POSITIVE / 4., 0.));
        assert!(is_operand_subnormal(Precision::Single, 1e-40));
        assert!(!is_operand_subnormal(Precision::Single, 0.));
        assert!(!is_operand_subnormal(Precision::Double, 1e-40));
        assert!(is_operand_subnormal(Precision::Half, 2f64.powi(-20)));
    }
}
