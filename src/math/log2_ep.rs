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
use crate::math::bits::frexp;
use crate::math::double_double::DoubleDouble;
use crate::math::log2_tables::{LOG2_R1, LOG2_R2, LOG2_R3};

#[inline]
fn table_entry(row: (u64, u64, u64)) -> (f64, DoubleDouble) {
    (
        f64::from_bits(row.0),
        DoubleDouble::from_bit_pair((row.2, row.1)),
    )
}

/// Computes log2(x) in double-double for finite positive `x`.
///
/// Three table reductions drive the mantissa within 2^-14 of one, then
/// a degree-4 fit of log2(1+z)/z finishes the job. Relative error stays
/// around 2^-76.
///
/// Zero gives -Inf, negative inputs NaN, +Inf and NaN pass through,
/// all with a zero low part.
pub fn log2_extended(x: f64) -> DoubleDouble {
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
        return DoubleDouble::from_f64(x);
    }

    let (mut f, mut m) = frexp(x);
    if f < 0.75 {
        f *= 2.;
        m -= 1;
    }

    // [0.75, 1.5) -> [1 - 2^-7, 1 + 2^-6)
    let index = (((f.to_bits().wrapping_add(1u64 << 51)) & 0x000f_c000_0000_0000) >> 46) as usize;
    let (r1, mut log_r1) = table_entry(LOG2_R1[index]);
    // log2(r1) hi carries 39 bits, the exponent fits without spilling
    log_r1.hi += m as f64;

    let mut z = DoubleDouble::exact_mult(r1, f);

    // -> [1 - 2^-12, 1 + 2^-11)
    let index = (((z.hi.to_bits().wrapping_add(1u64 << 46)) & 0x0000_7e00_0000_0000) >> 41) as usize;
    let (r2, log_r2) = table_entry(LOG2_R2[index]);
    z = DoubleDouble::mul_f64(z, r2);

    // -> [1 - 2^-14, 1 + 2^-13)
    let index = (((z.hi.to_bits().wrapping_add(1u64 << 41)) & 0x0000_0380_0000_0000) >> 39) as usize;
    let (r3, log_r3) = table_entry(LOG2_R3[index]);

    let mut log_r = DoubleDouble::add_dd(log_r1, log_r2);
    log_r = DoubleDouble::add_dd(log_r3, log_r);

    z = DoubleDouble::mul_f64(z, r3);
    let z = DoubleDouble::from_exact_add(z.hi - 1., z.lo);

    const A0_HI: f64 = f64::from_bits(0x3ff71547652b82fe);
    const A0_LO: f64 = f64::from_bits(0x3c7777c9cbb675c0);

    let mut y = f64::from_bits(0x3fd276d2736fade7);
    y = f64::from_bits(0xbfd7154765782df1) + y * z.hi;
    y = f64::from_bits(0x3fdec709dc3a0f67) + y * z.hi;
    y = f64::from_bits(0xbfe71547652b82fe) + y * z.hi;
    y *= z.hi * z.hi;
    y += z.hi * A0_LO;
    y += z.lo * A0_HI;

    let lead = DoubleDouble::exact_mult(A0_HI, z.hi);
    let lead = DoubleDouble::add_f64(lead, y);
    DoubleDouble::add_dd(lead, log_r)
}
