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
//! References for fast relaxed math, evaluated at single precision.
use crate::config::RoundingPolicy;
use crate::math::double_double::DoubleDouble;
use crate::math::exp2_ep::exp2_extended;
use crate::math::log2_ep::log2_extended;
use crate::math::pow_ep::log_extended;

pub use crate::math::trig::{relaxed_cos as cos, relaxed_sin as sin, relaxed_tan as tan};

#[inline]
fn to_single(r: DoubleDouble) -> f32 {
    r.narrow_f32(RoundingPolicy::default())
}

/// Natural logarithm of the single precision operand, rounded to single
pub fn log(x: f64) -> f64 {
    to_single(log_extended(x as f32 as f64)) as f64
}

/// `exp2(y * log2(x))` with single precision intermediates
pub fn pow(x: f64, y: f64) -> f64 {
    let l = to_single(log2_extended(x as f32 as f64));
    let t = (y as f32) * l;
    to_single(exp2_extended(DoubleDouble::from_f64(t as f64))) as f64
}

pub fn mad(a: f64, b: f64, c: f64) -> f64 {
    ((a as f32) * (b as f32) + c as f32) as f64
}

pub fn divide(x: f64, y: f64) -> f64 {
    ((x as f32) / (y as f32)) as f64
}

pub fn sincos(x: f64) -> (f64, f64) {
    (sin(x), cos(x))
}
