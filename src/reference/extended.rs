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
//! Double-double references for double precision candidates.
use crate::math::bits::F64_MANTISSA_MASK;
use crate::math::double_double::DoubleDouble;
use crate::math::exp2_ep::exp2_extended;
use crate::math::log2_ep::log2_extended;
use crate::reference::common;

macro_rules! widen_unary {
    ($($name: ident => $f: path),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: f64) -> DoubleDouble {
                DoubleDouble::from_f64($f(x))
            }
        )*
    };
}

macro_rules! widen_binary {
    ($($name: ident => $f: path),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: f64, y: f64) -> DoubleDouble {
                DoubleDouble::from_f64($f(x, y))
            }
        )*
    };
}

// Correctly rounded double results, accurate to half an ulp of a double.
widen_unary!(
    acos => pxfm::f_acos,
    acosh => pxfm::f_acosh,
    acospi => pxfm::f_acospi,
    asin => pxfm::f_asin,
    asinh => pxfm::f_asinh,
    asinpi => pxfm::f_asinpi,
    atan => pxfm::f_atan,
    atanh => pxfm::f_atanh,
    atanpi => pxfm::f_atanpi,
    cosh => pxfm::f_cosh,
    sinh => pxfm::f_sinh,
    tanh => pxfm::f_tanh,
    expm1 => pxfm::f_expm1,
    log1p => pxfm::f_log1p,
    lgamma => pxfm::f_lgamma,
    sinpi => crate::math::trig::sinpi_reference,
    cospi => crate::math::trig::cospi_reference,
    tanpi => crate::math::trig::tanpi_reference,
);

widen_binary!(
    atan2 => pxfm::f_atan2,
    atan2pi => pxfm::f_atan2pi,
);

// Exact in double precision.
widen_unary!(
    fabs => common::fabs,
    ceil => common::ceil,
    floor => common::floor,
    trunc => common::trunc,
    round => common::round,
    rint => common::rint,
    logb => common::logb,
    assignment => common::assignment,
);

widen_binary!(
    copysign => common::copysign,
    fmax => common::fmax,
    fmin => common::fmin,
    maxmag => common::maxmag,
    minmag => common::minmag,
    fmod => libm::fmod,
    remainder => libm::remainder,
    nextafter => libm::nextafter,
);

pub use crate::math::pow_ep::{
    add_extended as add, cbrt_extended as cbrt, divide_extended as divide, exp_extended as exp,
    exp10_extended as exp10, fma_extended as fma, hypot_extended as hypot, log_extended as log,
    log10_extended as log10, multiply_extended as multiply, pow_extended as pow,
    pown_extended as pown, powr_extended as powr, recip_extended as recip,
    rootn_extended as rootn, rsqrt_extended as rsqrt, sqrt_extended as sqrt,
    subtract_extended as subtract,
};
pub use crate::math::trig::{
    cos_extended as cos, sin_extended as sin, sincos_extended as sincos, tan_extended as tan,
};

pub fn exp2(x: f64) -> DoubleDouble {
    exp2_extended(DoubleDouble::from_f64(x))
}

pub fn log2(x: f64) -> DoubleDouble {
    log2_extended(x)
}

/// Positive difference, kept exact
pub fn fdim(x: f64, y: f64) -> DoubleDouble {
    if x.is_nan() || y.is_nan() {
        return DoubleDouble::from_f64(x + y);
    }
    if x > y {
        crate::math::pow_ep::subtract_extended(x, y)
    } else {
        DoubleDouble::from_f64(0.)
    }
}

pub fn mad(a: f64, b: f64, c: f64) -> DoubleDouble {
    DoubleDouble::from_f64(common::mad(a, b, c))
}

pub fn ldexp(x: f64, n: i32) -> DoubleDouble {
    DoubleDouble::from_f64(crate::math::bits::scalbn(x, n))
}

pub fn frexp(x: f64) -> (DoubleDouble, i32) {
    let (f, e) = crate::math::bits::frexp(x);
    (DoubleDouble::from_f64(f), e)
}

pub fn modf(x: f64) -> (DoubleDouble, DoubleDouble) {
    let (f, i) = common::modf(x);
    (DoubleDouble::from_f64(f), DoubleDouble::from_f64(i))
}

/// `(fract, floor)` with the fraction kept below one.
pub fn fract(x: f64) -> (DoubleDouble, DoubleDouble) {
    if x.is_nan() {
        let nan = DoubleDouble::from_f64(f64::NAN);
        return (nan, nan);
    }
    let (f, i) = common::modf(x);
    if f >= 0. {
        return (DoubleDouble::from_f64(f), DoubleDouble::from_f64(i));
    }
    let below_one = DoubleDouble::exact_add(1., f);
    let f = if below_one.to_f64_nearest() >= 1. {
        // 0x1.fffffffffffffp-1
        DoubleDouble::from_f64(f64::from_bits(0x3fefffffffffffff))
    } else {
        below_one
    };
    (f, DoubleDouble::from_f64(i - 1.))
}

pub fn remquo(x: f64, y: f64) -> (DoubleDouble, i32) {
    let (r, q) = libm::remquo(x, y);
    (DoubleDouble::from_f64(r), q)
}

pub fn lgamma_r(x: f64) -> (DoubleDouble, i32) {
    let (r, sign) = libm::lgamma_r(x);
    (DoubleDouble::from_f64(r), sign)
}

/// Quiet double NaN carrying the payload
pub fn nan(payload: u64) -> DoubleDouble {
    DoubleDouble::from_f64(f64::from_bits(
        (payload & F64_MANTISSA_MASK) | 0x7ff8_0000_0000_0000,
    ))
}

pub fn isnormal(x: f64) -> i32 {
    x.is_normal() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_wrappers() {
        assert_eq!(fdim(3., 1.).hi, 2.);
        assert_eq!(fdim(-3., 1.).hi, 0.);
        let d = fdim(1., f64::from_bits(0x3c90000000000000));
        assert_eq!(d.hi + d.lo, d.hi);
        assert!(d.lo < 0.);
        assert_eq!(ldexp(1., -1074).hi, f64::from_bits(1));
        assert_eq!(frexp(-12.).0.hi, -0.75);
        assert_eq!(frexp(-12.).1, 4);
        assert_eq!(remquo(5., 3.).1, 2);
        assert!(nan(3).is_nan());
        assert_eq!(isnormal(1e-310), 0);
        assert_eq!(nextafter(0., 1.).hi, f64::from_bits(1));
    }

    #[test]
    fn test_fract() {
        let (f, i) = fract(-0.25);
        assert_eq!((f.hi, i.hi), (0.75, -1.));
        let (f, i) = fract(-1e-300);
        assert_eq!(f.hi, f64::from_bits(0x3fefffffffffffff));
        assert_eq!(i.hi, -1.);
        let (f, _) = fract(-1e-17);
        assert_eq!(f.hi + f.lo, f.hi);
        let (f, i) = fract(7.5);
        assert_eq!((f.hi, i.hi), (0.5, 7.));
        assert!(fract(f64::NAN).0.is_nan());
    }

    #[test]
    fn test_accurate_wrappers() {
        assert_eq!(exp2(3.).hi, 8.);
        assert_eq!(log2(1024.).hi, 10.);
        assert_eq!(pow(2., 10.).hi, 1024.);
        assert_eq!(sqrt(2.).hi, 2f64.sqrt());
        assert_eq!(atan2(1., 1.).hi, std::f64::consts::FRAC_PI_4);
        assert_eq!(sinpi(0.5).hi, 1.);
    }
}
