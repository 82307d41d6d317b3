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
//! Double precision references for single and half precision candidates.
//!
//! Every result is a double that narrows to the tested precision with one
//! rounding: exact operations return the round-to-odd image of their
//! double-double value, the rest round the extended result to odd as well.
use crate::math::bits::ilogb as ilogb_f64;
use crate::math::double_double::DoubleDouble;
use crate::math::exp2_ep::exp2_extended;
use crate::math::log2_ep::log2_extended;
use crate::math::pow_ep::{
    cbrt_extended, divide_extended, exp_extended, exp10_extended, fma_extended, hypot_extended,
    log_extended, log10_extended, pow_extended, pown_extended, powr_extended, recip_extended,
    rootn_extended, rsqrt_extended,
};

#[inline]
fn single(r: DoubleDouble) -> f64 {
    r.to_f64_odd()
}

pub fn exp(x: f64) -> f64 {
    single(exp_extended(x))
}

pub fn exp2(x: f64) -> f64 {
    single(exp2_extended(DoubleDouble::from_f64(x)))
}

pub fn exp10(x: f64) -> f64 {
    single(exp10_extended(x))
}

pub fn log(x: f64) -> f64 {
    single(log_extended(x))
}

pub fn log2(x: f64) -> f64 {
    single(log2_extended(x))
}

pub fn log10(x: f64) -> f64 {
    single(log10_extended(x))
}

pub fn pow(x: f64, y: f64) -> f64 {
    single(pow_extended(x, y))
}

pub fn pown(x: f64, n: i32) -> f64 {
    single(pown_extended(x, n))
}

pub fn powr(x: f64, y: f64) -> f64 {
    single(powr_extended(x, y))
}

pub fn rootn(x: f64, n: i32) -> f64 {
    single(rootn_extended(x, n))
}

pub fn cbrt(x: f64) -> f64 {
    single(cbrt_extended(x))
}

pub fn rsqrt(x: f64) -> f64 {
    single(rsqrt_extended(x))
}

pub fn hypot(x: f64, y: f64) -> f64 {
    single(hypot_extended(x, y))
}

/// The square root of a single precision value needs no extra care,
/// a double result rounds to `f32` correctly.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

pub fn add(x: f64, y: f64) -> f64 {
    single(DoubleDouble::exact_add(x, y))
}

pub fn subtract(x: f64, y: f64) -> f64 {
    single(DoubleDouble::exact_add(x, -y))
}

pub fn multiply(x: f64, y: f64) -> f64 {
    let r = x * y;
    if !r.is_finite() || r == 0. {
        return r;
    }
    single(DoubleDouble::exact_mult(x, y))
}

pub fn divide(x: f64, y: f64) -> f64 {
    single(divide_extended(x, y))
}

pub fn recip(x: f64) -> f64 {
    single(recip_extended(x))
}

pub fn fma(a: f64, b: f64, c: f64) -> f64 {
    single(fma_extended(a, b, c))
}

/// Positive difference evaluated on single precision operands
pub fn fdim(x: f64, y: f64) -> f64 {
    let (x, y) = (x as f32 as f64, y as f32 as f64);
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return y;
    }
    if x > y { subtract(x, y) } else { 0. }
}

pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmodf(x as f32, y as f32) as f64
}

pub fn remainder(x: f64, y: f64) -> f64 {
    libm::remainderf(x as f32, y as f32) as f64
}

/// Remainder with the signed low bits of the quotient
pub fn remquo(x: f64, y: f64) -> (f64, i32) {
    let (r, q) = libm::remquof(x as f32, y as f32);
    (r as f64, q)
}

/// `ilogb` of the operand after rounding it to single precision
pub fn ilogb(x: f64) -> i32 {
    ilogb_f64(x as f32 as f64)
}

pub fn isnormal(x: f64) -> i32 {
    (x as f32).is_normal() as i32
}

/// Fractional part clamped below one, computed in single precision.
///
/// Returns `(fract, floor)`.
pub fn fract(x: f64) -> (f64, f64) {
    if x.is_nan() {
        return (f64::NAN, f64::NAN);
    }
    let v = x as f32;
    let mut i = v.trunc();
    let mut f = if v.is_infinite() { 0f32.copysign(v) } else { v - i };
    if f < 0. {
        f += 1.;
        i -= 1.;
        if f == 1. {
            // largest single precision value below one
            f = f32::from_bits(0x3f7fffff);
        }
    }
    (f as f64, i as f64)
}

pub fn frexp(x: f64) -> (f64, i32) {
    crate::math::bits::frexp(x)
}

pub fn ldexp(x: f64, n: i32) -> f64 {
    crate::math::bits::scalbn(x, n)
}

/// Quiet single precision NaN carrying the payload
pub fn nan(payload: u64) -> f64 {
    f32::from_bits(payload as u32 | 0x7fc0_0000) as f64
}

pub fn nextafter(x: f64, y: f64) -> f64 {
    libm::nextafterf(x as f32, y as f32) as f64
}

pub fn lgamma(x: f64) -> f64 {
    pxfm::f_lgamma(x)
}

pub fn lgamma_r(x: f64) -> (f64, i32) {
    libm::lgamma_r(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_operations_round_once() {
        // 1 + 2^-24 + 2^-60 sits just above a single precision midpoint
        let x = 1. + f64::from_bits(0x3e70000000000000);
        let y = f64::from_bits(0x3c30000000000000);
        let r = add(x, y);
        assert_eq!(r as f32, 1.0000001f32, "Invalid add narrowing {r}");
        assert_eq!(x + y, x);
        assert_eq!(multiply(3., 5.), 15.);
        assert_eq!(subtract(1., 1.), 0.);
        assert_eq!(divide(1., 4.), 0.25);
        assert_eq!(fma(2., 3., 1.), 7.);
        assert!(divide(1., 0.).is_infinite());
    }

    #[test]
    fn test_engine_values() {
        assert_eq!(exp2(10.), 1024.);
        assert_eq!(log2(8.), 3.);
        assert_eq!(pow(2., 10.), 1024.);
        assert_eq!(pown(-2., 3), -8.);
        assert_eq!(rootn(-27., 3) as f32, -3f32);
        assert_eq!(cbrt(8.) as f32, 2f32);
        assert_eq!(hypot(3., 4.), 5.);
        assert_eq!(rsqrt(4.), 0.5);
        assert_eq!(exp(0.), 1.);
        assert_eq!(log10(1000.) as f32, 3f32);
    }

    #[test]
    fn test_single_flavoured() {
        assert_eq!(fract(-0.25), (0.75, -1.));
        let (f, i) = fract(-1e-20);
        assert_eq!(f as f32, f32::from_bits(0x3f7fffff));
        assert_eq!(i, -1.);
        assert!(fract(f64::NAN).1.is_nan());
        assert_eq!(fract(f64::INFINITY), (0., f64::INFINITY));
        assert_eq!(fdim(3., 1.), 2.);
        assert_eq!(fdim(1., 3.), 0.);
        assert!(fdim(f64::NAN, 3.).is_nan());
        assert_eq!(ilogb(1e300), i32::MAX);
        assert_eq!(ilogb(0.75), -1);
        assert_eq!(isnormal(1e-40), 0);
        assert_eq!(isnormal(1e-30), 1);
        assert_eq!(nextafter(1., 2.) as f32, 1.0000001f32);
        assert!(nan(5).is_nan());
        assert_eq!(remquo(5., 3.), (-1., 2));
        assert_eq!(remquo(-7., 2.), (1., -4));
        assert_eq!(fmod(-7., 2.), -1.);
        assert_eq!(frexp(8.), (0.5, 4));
        assert_eq!(ldexp(1., -149) as f32, f32::from_bits(1));
    }
}
