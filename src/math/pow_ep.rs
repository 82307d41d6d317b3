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
use crate::math::bits::{ilogb, scalbn, sign_bit_f64};
use crate::math::double_double::DoubleDouble;
use crate::math::exp2_ep::exp2_extended;
use crate::math::log2_ep::log2_extended;

pub(crate) const LN2: DoubleDouble =
    DoubleDouble::from_bit_pair((0x3c7abc9e3b39803f, 0x3fe62e42fefa39ef));
pub(crate) const LOG2_E: DoubleDouble =
    DoubleDouble::from_bit_pair((0x3c7777d0ffda0d24, 0x3ff71547652b82fe));
pub(crate) const LOG10_2: DoubleDouble =
    DoubleDouble::from_bit_pair((0xbc49dc1da994fd21, 0x3fd34413509f79ff));
pub(crate) const LOG2_10: DoubleDouble =
    DoubleDouble::from_bit_pair((0x3ca7f2495fb7fa6d, 0x400a934f0979a371));
// 1/3, low part rounded up so that 3 * (1/3) lands just above one
const ONE_THIRD: DoubleDouble =
    DoubleDouble::from_bit_pair((0x3c75580000000000, 0x3fd5555555555555));

// 2^53
const TWO_POW_53: f64 = f64::from_bits(0x4340000000000000);
// 2^970
const POW_SCALE_THRESHOLD: f64 = f64::from_bits(0x7c90000000000000);

#[inline]
fn copysign_dd(v: DoubleDouble, sign: f64) -> DoubleDouble {
    if sign_bit_f64(v.hi) != sign_bit_f64(sign) {
        -v
    } else {
        v
    }
}

/// 2^t for an exponent already computed as `y * log2(x)`
#[inline]
fn exp2_of_product(t: DoubleDouble) -> DoubleDouble {
    if t.hi.is_infinite() || t.hi.abs() > 2200. {
        if sign_bit_f64(t.hi) {
            DoubleDouble::from_f64(0.)
        } else {
            DoubleDouble::from_f64(f64::INFINITY)
        }
    } else {
        exp2_extended(t)
    }
}

/// Floor of `|y|` and whether `y` is an odd integer below 2^53
#[inline]
fn odd_integer(abs_y: f64) -> (f64, bool) {
    let mut iy = abs_y.round_ties_even();
    if iy > abs_y {
        iy -= 1.;
    }
    let odd = abs_y == iy
        && !abs_y.is_infinite()
        && iy < TWO_POW_53
        && (iy - 2. * (0.5 * iy).round_ties_even()) != 0.;
    (iy, odd)
}

/// Computes x^y with a double-double exponent, IEEE 754 special values included.
pub(crate) fn pow_dd(x: f64, y: DoubleDouble) -> DoubleDouble {
    // x == 1 wins even against NaN, as y == 0 does
    if x == 1. {
        return DoubleDouble::from_f64(x);
    }
    if y.hi == 0. {
        return DoubleDouble::from_f64(1.);
    }
    if x.is_nan() || y.hi.is_nan() {
        return DoubleDouble::from_f64(x + y.hi);
    }

    let y_f64 = y.to_f64();
    let abs_y = y_f64.abs();
    let abs_x = x.abs();
    let (iy, odd) = odd_integer(abs_y);

    if x == 0. {
        let mut r = if odd { x } else { 0. };
        if y_f64 < 0. {
            r = 1. / r;
        }
        return DoubleDouble::from_f64(r);
    }

    if abs_x.is_infinite() {
        let r = match (x < 0., odd, y_f64 < 0.) {
            (true, true, true) => -0.,
            (true, true, false) => f64::NEG_INFINITY,
            (_, _, true) => 0.,
            (_, _, false) => f64::INFINITY,
        };
        return DoubleDouble::from_f64(r);
    }

    if abs_y.is_infinite() {
        let r = if x == -1. {
            1.
        } else if (y_f64 < 0.) == (abs_x < 1.) {
            f64::INFINITY
        } else {
            0.
        };
        return DoubleDouble::from_f64(r);
    }

    if x < 0. && iy != abs_y {
        return DoubleDouble::from_f64(f64::NAN);
    }

    if abs_y == 0.5 {
        let s = DoubleDouble::sqrt_dd(DoubleDouble::from_f64(x));
        return if y_f64 < 0. { s.recip() } else { s };
    }

    let log2x = log2_extended(abs_x);
    let product = if abs_y > POW_SCALE_THRESHOLD {
        DoubleDouble::mul_dd(log2x, y.ldexp(-53)).ldexp(53)
    } else {
        DoubleDouble::mul_dd(log2x, y)
    };

    let r = exp2_of_product(product);
    if odd && sign_bit_f64(x) { -r } else { r }
}

pub fn pow_extended(x: f64, y: f64) -> DoubleDouble {
    pow_dd(x, DoubleDouble::from_f64(y))
}

pub fn pown_extended(x: f64, n: i32) -> DoubleDouble {
    pow_dd(x, DoubleDouble::from_f64(n as f64))
}

/// x^y restricted to x >= 0, where the indeterminate forms are NaN.
pub fn powr_extended(x: f64, y: f64) -> DoubleDouble {
    if x < 0. {
        return DoubleDouble::from_f64(f64::NAN);
    }
    if x.is_nan() || y.is_nan() {
        return DoubleDouble::from_f64(x + y);
    }
    if x == 1. {
        return if y.is_infinite() {
            DoubleDouble::from_f64(f64::NAN)
        } else {
            DoubleDouble::from_f64(1.)
        };
    }
    if y == 0. {
        return if x == 0. || x == f64::INFINITY {
            DoubleDouble::from_f64(f64::NAN)
        } else {
            DoubleDouble::from_f64(1.)
        };
    }
    if x == 0. {
        return if y < 0. {
            DoubleDouble::from_f64(f64::INFINITY)
        } else {
            DoubleDouble::from_f64(0.)
        };
    }
    pow_extended(x, y)
}

/// n-th root of `x`, computed as x^(hi) * x^(lo) of the double-double 1/n.
pub fn rootn_extended(x: f64, n: i32) -> DoubleDouble {
    if n == 0 {
        return DoubleDouble::from_f64(f64::NAN);
    }
    if x < 0. && n & 1 == 0 {
        return DoubleDouble::from_f64(f64::NAN);
    }
    if x.is_infinite() {
        return if n < 0 {
            DoubleDouble::from_f64(0f64.copysign(x))
        } else {
            DoubleDouble::from_f64(x)
        };
    }
    if x == 0. {
        let r = match (n < 0, n & 1 != 0) {
            (false, false) => 0.,
            (false, true) => x,
            (true, false) => f64::INFINITY,
            (true, true) => f64::INFINITY.copysign(x),
        };
        return DoubleDouble::from_f64(r);
    }
    if n == 1 {
        return DoubleDouble::from_f64(x);
    }
    if n == -1 {
        return DoubleDouble::div_dd(DoubleDouble::from_f64(1.), DoubleDouble::from_f64(x));
    }

    let exponent = DoubleDouble::div_dd(
        DoubleDouble::from_f64(1.),
        DoubleDouble::from_f64(n as f64),
    );
    let abs_x = x.abs();
    let r = DoubleDouble::mul_dd(
        pow_extended(abs_x, exponent.hi),
        pow_extended(abs_x, exponent.lo),
    );
    copysign_dd(r, x)
}

pub fn cbrt_extended(x: f64) -> DoubleDouble {
    let abs_x = x.abs();
    if x.is_nan() || abs_x == 1. || abs_x == 0. || x.is_infinite() {
        return DoubleDouble::from_f64(x);
    }
    let product = DoubleDouble::mul_dd(log2_extended(abs_x), ONE_THIRD);
    copysign_dd(exp2_of_product(product), x)
}

#[inline]
fn log_in_base(x: f64, scale: DoubleDouble) -> DoubleDouble {
    if x.is_nan() {
        return DoubleDouble::from_f64(x);
    }
    if x == 0. {
        return DoubleDouble::from_f64(f64::NEG_INFINITY);
    }
    if x < 0. {
        return DoubleDouble::from_f64(f64::NAN);
    }
    if x.is_infinite() {
        return DoubleDouble::from_f64(f64::INFINITY);
    }
    DoubleDouble::mul_dd(log2_extended(x), scale)
}

pub fn log_extended(x: f64) -> DoubleDouble {
    log_in_base(x, LN2)
}

pub fn log10_extended(x: f64) -> DoubleDouble {
    log_in_base(x, LOG10_2)
}

pub fn exp_extended(x: f64) -> DoubleDouble {
    if x.is_nan() {
        return DoubleDouble::from_f64(x);
    }
    exp2_extended(DoubleDouble::mul_f64(LOG2_E, x))
}

pub fn exp10_extended(x: f64) -> DoubleDouble {
    if x.is_nan() {
        return DoubleDouble::from_f64(x);
    }
    exp2_extended(DoubleDouble::mul_f64(LOG2_10, x))
}

pub fn sqrt_extended(x: f64) -> DoubleDouble {
    DoubleDouble::sqrt_dd(DoubleDouble::from_f64(x))
}

pub fn rsqrt_extended(x: f64) -> DoubleDouble {
    sqrt_extended(x).recip()
}

/// sqrt(x^2 + y^2) with the operands rescaled away from overflow and underflow.
pub fn hypot_extended(x: f64, y: f64) -> DoubleDouble {
    if x.is_infinite() || y.is_infinite() {
        return DoubleDouble::from_f64(f64::INFINITY);
    }
    if x.is_nan() || y.is_nan() {
        return DoubleDouble::from_f64(x + y);
    }
    let x = x.abs();
    let y = y.abs();
    let max = x.max(y);
    let min = x.min(y);

    if max == 0. {
        return DoubleDouble::from_f64(0.);
    }
    // max lands in [1, 2); a min that underflows is below its rounding error
    let scale = ilogb(max);
    let max = DoubleDouble::from_f64(max).ldexp(-scale);
    let min = DoubleDouble::from_f64(min).ldexp(-scale);
    let sum = DoubleDouble::add_dd(
        DoubleDouble::exact_mult(max.hi, max.hi),
        DoubleDouble::exact_mult(min.hi, min.hi),
    );
    DoubleDouble::sqrt_dd(sum).ldexp(scale)
}

pub fn divide_extended(x: f64, y: f64) -> DoubleDouble {
    DoubleDouble::div_dd(DoubleDouble::from_f64(x), DoubleDouble::from_f64(y))
}

pub fn recip_extended(x: f64) -> DoubleDouble {
    divide_extended(1., x)
}

#[inline]
fn finite_or_plain(r: DoubleDouble) -> DoubleDouble {
    if r.hi.is_finite() {
        r
    } else {
        DoubleDouble::from_f64(r.hi)
    }
}

pub fn add_extended(x: f64, y: f64) -> DoubleDouble {
    finite_or_plain(DoubleDouble::exact_add(x, y))
}

pub fn subtract_extended(x: f64, y: f64) -> DoubleDouble {
    finite_or_plain(DoubleDouble::exact_add(x, -y))
}

pub fn multiply_extended(x: f64, y: f64) -> DoubleDouble {
    finite_or_plain(DoubleDouble::exact_mult(x, y))
}

/// Correctly rounded a * b + c, the low part only carries the residual sign.
pub fn fma_extended(a: f64, b: f64, c: f64) -> DoubleDouble {
    let hi = a.mul_add(b, c);
    if !hi.is_finite() || a == 0. || b == 0. || c == 0. {
        return DoubleDouble::from_f64(hi);
    }
    if (a * b).is_finite() {
        let exact = DoubleDouble::add_dd(
            DoubleDouble::exact_mult(a, b),
            DoubleDouble::from_f64(c),
        );
        let residual = DoubleDouble::sub_dd(exact, DoubleDouble::from_f64(hi));
        return DoubleDouble::new(residual.to_f64(), hi);
    }
    // a*b overflows while the fused sum does not: the larger factor is at
    // least 2^511, so moving 2^128 out of it and out of c stays exact
    const SHIFT: i32 = 128;
    let (a, b) = if a.abs() >= b.abs() { (a, b) } else { (b, a) };
    let exact = DoubleDouble::add_dd(
        DoubleDouble::exact_mult(scalbn(a, -SHIFT), b),
        DoubleDouble::from_f64(scalbn(c, -SHIFT)),
    );
    let residual = DoubleDouble::sub_dd(exact, DoubleDouble::from_f64(scalbn(hi, -SHIFT)));
    let lo = scalbn(residual.to_f64(), SHIFT);
    if lo.is_finite() {
        DoubleDouble::new(lo, hi)
    } else {
        DoubleDouble::from_f64(hi)
    }
}
