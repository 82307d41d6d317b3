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
//! Exact references that round identically in every precision.
use crate::math::bits::ilogb;

#[inline]
pub fn fabs(x: f64) -> f64 {
    x.abs()
}

#[inline]
pub fn copysign(x: f64, y: f64) -> f64 {
    x.copysign(y)
}

#[inline]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[inline]
pub fn floor(x: f64) -> f64 {
    x.floor()
}

#[inline]
pub fn trunc(x: f64) -> f64 {
    x.trunc()
}

/// Halfway cases round away from zero
#[inline]
pub fn round(x: f64) -> f64 {
    x.round()
}

/// Halfway cases round to even
#[inline]
pub fn rint(x: f64) -> f64 {
    x.round_ties_even()
}

/// `fmax` returning `x` whenever `y` is NaN, and `y` when only `x` is NaN.
pub fn fmax(x: f64, y: f64) -> f64 {
    if y.is_nan() {
        return x;
    }
    if x >= y { x } else { y }
}

pub fn fmin(x: f64, y: f64) -> f64 {
    if y.is_nan() {
        return x;
    }
    if x <= y { x } else { y }
}

/// Operand with the larger magnitude, ties fall back to [fmax]
pub fn maxmag(x: f64, y: f64) -> f64 {
    let (ax, ay) = (x.abs(), y.abs());
    if ax < ay {
        return y;
    }
    if ay < ax {
        return x;
    }
    fmax(x, y)
}

/// Operand with the smaller magnitude, ties fall back to [fmin]
pub fn minmag(x: f64, y: f64) -> f64 {
    let (ax, ay) = (x.abs(), y.abs());
    if ax > ay {
        return y;
    }
    if ay > ax {
        return x;
    }
    fmin(x, y)
}

/// `(fractional, integral)` parts, both carrying the sign of `x`
pub fn modf(x: f64) -> (f64, f64) {
    if x.is_nan() {
        return (x, x);
    }
    let integral = x.trunc();
    if x.is_infinite() {
        return (0f64.copysign(x), x);
    }
    ((x - integral).copysign(x), integral)
}

/// Unbiased exponent as a float, subnormals are normalized first.
pub fn logb(x: f64) -> f64 {
    if !x.is_finite() {
        return x * x;
    }
    if x == 0. {
        return f64::NEG_INFINITY;
    }
    ilogb(x) as f64
}

#[inline]
pub fn mad(a: f64, b: f64, c: f64) -> f64 {
    a * b + c
}

#[inline]
pub fn assignment(x: f64) -> f64 {
    x
}

pub fn isequal(x: f64, y: f64) -> i32 {
    (x == y) as i32
}

pub fn isnotequal(x: f64, y: f64) -> i32 {
    (x != y) as i32
}

pub fn isgreater(x: f64, y: f64) -> i32 {
    (x > y) as i32
}

pub fn isgreaterequal(x: f64, y: f64) -> i32 {
    (x >= y) as i32
}

pub fn isless(x: f64, y: f64) -> i32 {
    (x < y) as i32
}

pub fn islessequal(x: f64, y: f64) -> i32 {
    (x <= y) as i32
}

pub fn islessgreater(x: f64, y: f64) -> i32 {
    (x < y || x > y) as i32
}

pub fn isordered(x: f64, y: f64) -> i32 {
    (!x.is_nan() && !y.is_nan()) as i32
}

pub fn isunordered(x: f64, y: f64) -> i32 {
    (x.is_nan() || y.is_nan()) as i32
}

pub fn isfinite(x: f64) -> i32 {
    x.is_finite() as i32
}

pub fn isinf(x: f64) -> i32 {
    x.is_infinite() as i32
}

pub fn isnan(x: f64) -> i32 {
    x.is_nan() as i32
}

pub fn signbit(x: f64) -> i32 {
    x.is_sign_negative() as i32
}

/// Logical not, NaN compares unequal to zero
pub fn not(x: f64) -> i32 {
    (x == 0.) as i32
}
