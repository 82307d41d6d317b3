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
use crate::math::double_double::DoubleDouble;
use crate::math::payne_hanek::reduce_mod_half_pi;
use pxfm::{f_cos, f_cospi, f_sin, f_sinpi, f_tan, f_tanpi};

// 2^-1022
const MIN_NORMAL: f64 = f64::MIN_POSITIVE;

/// Sine by quadrant: [sin, cos, -sin, -cos]
pub fn sin_reference(x: f64) -> f64 {
    let r = reduce_mod_half_pi(x);
    if r.passthrough {
        return f_sin(r.reduced);
    }
    match r.quadrant {
        0 => f_sin(r.reduced),
        1 => f_cos(r.reduced),
        2 => -f_sin(r.reduced),
        _ => -f_cos(r.reduced),
    }
}

/// Cosine by quadrant: [cos, -sin, -cos, sin]
pub fn cos_reference(x: f64) -> f64 {
    let r = reduce_mod_half_pi(x);
    if r.passthrough {
        return f_cos(r.reduced);
    }
    match r.quadrant {
        0 => f_cos(r.reduced),
        1 => -f_sin(r.reduced),
        2 => -f_cos(r.reduced),
        _ => f_sin(r.reduced),
    }
}

/// Tangent by quadrant: [tan, -1/tan, tan, -1/tan]
pub fn tan_reference(x: f64) -> f64 {
    let r = reduce_mod_half_pi(x);
    if r.passthrough || r.quadrant & 1 == 0 {
        f_tan(r.reduced)
    } else {
        -1. / f_tan(r.reduced)
    }
}

/// `(sin(x), cos(x))` from a single reduction
pub fn sincos_reference(x: f64) -> (f64, f64) {
    let r = reduce_mod_half_pi(x);
    let s = f_sin(r.reduced);
    let c = f_cos(r.reduced);
    if r.passthrough {
        return (s, c);
    }
    match r.quadrant {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

pub fn sin_extended(x: f64) -> DoubleDouble {
    // the reduced path can flush subnormal arguments
    if x.abs() < MIN_NORMAL {
        return DoubleDouble::from_f64(x);
    }
    DoubleDouble::from_f64(sin_reference(x))
}

pub fn cos_extended(x: f64) -> DoubleDouble {
    DoubleDouble::from_f64(cos_reference(x))
}

pub fn tan_extended(x: f64) -> DoubleDouble {
    if x.abs() < MIN_NORMAL {
        return DoubleDouble::from_f64(x);
    }
    DoubleDouble::from_f64(tan_reference(x))
}

pub fn sincos_extended(x: f64) -> (DoubleDouble, DoubleDouble) {
    if x.abs() < MIN_NORMAL {
        return (DoubleDouble::from_f64(x), DoubleDouble::from_f64(1.));
    }
    let (s, c) = sincos_reference(x);
    (DoubleDouble::from_f64(s), DoubleDouble::from_f64(c))
}

pub fn sinpi_reference(x: f64) -> f64 {
    f_sinpi(x)
}

pub fn cospi_reference(x: f64) -> f64 {
    f_cospi(x)
}

pub fn tanpi_reference(x: f64) -> f64 {
    f_tanpi(x)
}

/// Single precision sine, the relaxed reference
pub fn relaxed_sin(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    ((x as f32) as f64).sin() as f32 as f64
}

pub fn relaxed_cos(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    ((x as f32) as f64).cos() as f32 as f64
}

/// Relaxed tangent as the quotient of the relaxed sine and cosine
pub fn relaxed_tan(x: f64) -> f64 {
    let s = relaxed_sin(x) as f32;
    let c = relaxed_cos(x) as f32;
    (s / c) as f64
}
