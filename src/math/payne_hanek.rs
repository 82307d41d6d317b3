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
use crate::math::bits::{scalbn, sign_bit_f64};

const RADIX: u32 = 30;
const DIGIT_MASK: u64 = (1 << RADIX) - 1;
const DIGITS: usize = 6;

/// 2/pi in base 2^30, one leading integer digit
static TWO_OVER_PI: [u32; 51] = [
    0x0, 0x28be60db, 0x24e44152, 0x27f09d5f, 0x11f534dd, 0x3036d8a5, 0x1993c439, 0x107f945,
    0x23abdebb, 0x31586dc9, 0x6e3a424, 0x374b8019, 0x92eea09, 0x3464873f, 0x21deb1cb, 0x4a69cfb,
    0x288235f5, 0xbaed121, 0xe99c702, 0x1ad17df9, 0x13991d6, 0xe60d4ce, 0x1f49c845, 0x3e2ef7e4,
    0x283b1ff8, 0x25fff781, 0x1980fef2, 0x3c462d68, 0xa6d1f6d, 0xd9fb3c9, 0x3cb09b74, 0x3d18fd9a,
    0x1e5fea2d, 0x1d49eeb1, 0x3ebe5f17, 0x2cf41ce7, 0x378a5292, 0x3a9afed7, 0x3b11f8d5,
    0x3421580c, 0x3046fc7b, 0x1aeafc33, 0x3bc209af, 0x10d876a7, 0x2391615e, 0x3986c219,
    0x199855f1, 0x1281a102, 0xdffd880, 0x135cc9cc, 0x10606155,
];

/// pi/2 in base 2^30
static PI_OVER_TWO: [u32; DIGITS] = [
    0x1, 0x2487ed51, 0x42d1846, 0x26263314, 0x1701b839, 0x28948127,
];

/// A double as three base 2^30 digits scaled by 2^(30 * index)
#[derive(Copy, Clone, Debug, Default)]
struct RadixDigits {
    digits: [u32; 3],
    index: i32,
    negative: bool,
}

impl RadixDigits {
    fn from_f64(x: f64) -> RadixDigits {
        let pradix = (1u64 << RADIX) as f64;
        let mradix = 1. / pradix;
        let negative = sign_bit_f64(x);
        let mut x = x.abs();
        let mut index = 0i32;
        while x > pradix {
            index += 1;
            x *= mradix;
        }
        while x < 1. {
            index -= 1;
            x *= pradix;
        }
        let mut digits = [0u32; 3];
        for digit in digits.iter_mut() {
            if x == 0. {
                break;
            }
            *digit = x as u32;
            x = (x - *digit as f64) * pradix;
        }
        RadixDigits {
            digits,
            index,
            negative,
        }
    }

    fn to_f64(self) -> f64 {
        let mut r = 0.;
        for (k, &digit) in self.digits.iter().enumerate() {
            r += scalbn(digit as f64, (self.index - k as i32) * RADIX as i32);
        }
        if self.negative { -r } else { r }
    }
}

/// Result of reducing an argument modulo pi/2.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReducedArgument {
    /// `x - N * pi/2`, in [-pi/4, pi/4]
    pub reduced: f64,
    /// `N mod 4`
    pub quadrant: u32,
    /// Set when no reduction was needed: |x| <= pi/4, NaN or Inf
    pub passthrough: bool,
}

/// Reduces `x` modulo pi/2 with a 150 bit fixed point product against 2/pi.
///
/// The worst double for this reduction, 6381956970095103 * 2^797, loses
/// 61 leading bits to cancellation; 90 bits are left after it.
pub fn reduce_mod_half_pi(x: f64) -> ReducedArgument {
    if x.is_nan() || x.is_infinite() || x.abs() <= std::f64::consts::FRAC_PI_4 {
        return ReducedArgument {
            reduced: x,
            quadrant: 0,
            passthrough: true,
        };
    }

    let epx = RadixDigits::from_f64(x);
    let mut product = [0u64; DIGITS + 2];
    for (i, dst) in product.iter_mut().enumerate() {
        let mut acc = 0u64;
        for (k, &digit) in epx.digits.iter().enumerate() {
            let j = epx.index + i as i32 - k as i32;
            if j >= 0 {
                acc = acc.wrapping_add((TWO_OVER_PI[j as usize] as u64) * digit as u64);
            }
        }
        *dst = acc;
    }

    for i in (1..DIGITS + 2).rev() {
        let carry = product[i] >> RADIX;
        product[i - 1] = product[i - 1].wrapping_add(carry);
        product[i] -= carry << RADIX;
    }

    // only the two low bits of the integer part matter
    let mut n = product[0] as u32;

    // a fraction above one half moves to the next quadrant with the sign flipped
    let mut flipped = false;
    if product[1] > 1 << (RADIX - 1) {
        for digit in product.iter_mut().skip(1) {
            *digit = !*digit & DIGIT_MASK;
        }
        n = n.wrapping_add(1);
        flipped = true;
    }

    // skip digits zeroed by cancellation
    let mut ind = 1usize;
    for &digit in product.iter().skip(1) {
        if digit != 0 {
            break;
        }
        ind += 1;
    }

    let mut r = [0u64; DIGITS - 1];
    for (i, dst) in r.iter_mut().enumerate() {
        let mut acc = 0u64;
        for (j, &pio2) in PI_OVER_TWO.iter().enumerate().take(i + 1) {
            let digit = product.get(ind + i - j).copied().unwrap_or(0);
            acc = acc.wrapping_add(digit.wrapping_mul(pio2 as u64));
        }
        *dst = acc;
    }
    for i in (1..DIGITS - 1).rev() {
        let carry = r[i] >> RADIX;
        r[i - 1] = r[i - 1].wrapping_add(carry);
        r[i] -= carry << RADIX;
    }
    let head = r[0] >> RADIX;
    r[0] -= head << RADIX;

    let negative = epx.negative != flipped;
    let epr = if head != 0 {
        RadixDigits {
            digits: [head as u32, r[0] as u32, r[1] as u32],
            index: 1 - ind as i32,
            negative,
        }
    } else {
        RadixDigits {
            digits: [r[0] as u32, r[1] as u32, r[2] as u32],
            index: -(ind as i32),
            negative,
        }
    };

    let signed_n = if epx.negative { n.wrapping_neg() } else { n };
    ReducedArgument {
        reduced: epr.to_f64(),
        quadrant: signed_n & 3,
        passthrough: false,
    }
}
