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
use crate::config::RoundingPolicy;
use crate::math::bits::{
    f64_to_f16_bits, is_subnormal_f32, scalbn, step_toward_zero_f32, step_toward_zero_f64,
};
#[allow(unused_imports)]
use crate::mlaf::mlaf;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Keeps the upper 26 significant bits, products of two such values are exact
#[inline(always)]
const fn upper(v: f64) -> f64 {
    f64::from_bits(v.to_bits() & 0xffff_ffff_f800_0000)
}

#[inline(always)]
const fn is_degenerate(v: f64) -> bool {
    v.is_nan() || v.is_infinite() || v == 0.
}

/// Unevaluated sum `hi + lo` of two doubles, roughly 106 significant bits.
///
/// NaN, infinite or zero operands make the arithmetic degrade to plain
/// double operations on `hi`, so special values propagate instead of
/// producing cancellation artifacts.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct DoubleDouble {
    pub lo: f64,
    pub hi: f64,
}

impl DoubleDouble {
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        DoubleDouble { lo, hi }
    }

    /// Builds a value from `(lo, hi)` bit patterns
    #[inline]
    pub const fn from_bit_pair(pair: (u64, u64)) -> Self {
        DoubleDouble {
            lo: f64::from_bits(pair.0),
            hi: f64::from_bits(pair.1),
        }
    }

    #[inline]
    pub const fn from_f64(v: f64) -> Self {
        DoubleDouble { lo: 0., hi: v }
    }

    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        self.hi.is_nan()
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        self.hi.is_finite()
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.hi.is_infinite()
    }

    #[inline]
    pub const fn abs(self) -> Self {
        if self.hi < 0. {
            DoubleDouble::new(-self.lo, -self.hi)
        } else {
            self
        }
    }

    /// Dekker split of `a` into a 26-bit head and the remainder.
    #[inline]
    pub const fn split(a: f64) -> DoubleDouble {
        let hi = upper(a);
        DoubleDouble::new(a - hi, hi)
    }

    /// Splits a double-double into four consecutive 26-bit pieces,
    /// ordered from the most significant.
    #[inline]
    pub fn split_dd(x: DoubleDouble) -> [f64; 4] {
        let mut hi = x.hi;
        let mut lo = x.lo;
        let p0 = upper(hi);
        hi -= p0;
        let p1 = upper(hi);
        hi -= p1;

        let t = hi;
        hi += lo;
        lo -= hi - t;
        let p2 = upper(hi);
        hi -= p2;

        [p0, p1, p2, hi + lo]
    }

    /// Exact sum, valid only for |a| >= |b|
    #[inline]
    pub const fn from_exact_add(a: f64, b: f64) -> DoubleDouble {
        let r_hi = a + b;
        let t = r_hi - a;
        let r_lo = b - t;
        DoubleDouble::new(r_lo, r_hi)
    }

    /// Exact sum for any ordering of `a` and `b`
    #[inline]
    pub const fn exact_add(a: f64, b: f64) -> DoubleDouble {
        let r_hi = a + b;
        let t1 = r_hi - a;
        let t2 = r_hi - t1;
        let t3 = b - t1;
        let t4 = a - t2;
        let r_lo = t3 + t4;
        DoubleDouble::new(r_lo, r_hi)
    }

    /// Exact product of two doubles
    #[inline]
    pub fn exact_mult(a: f64, b: f64) -> DoubleDouble {
        #[cfg(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "fma"
            ),
            all(target_arch = "aarch64", target_feature = "neon")
        ))]
        {
            let r_hi = a * b;
            let r_lo = mlaf(-r_hi, a, b);
            DoubleDouble::new(r_lo, r_hi)
        }
        #[cfg(not(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "fma"
            ),
            all(target_arch = "aarch64", target_feature = "neon")
        )))]
        {
            let r_hi = a * b;
            let sa = DoubleDouble::split(a);
            let sb = DoubleDouble::split(b);
            let r_lo = ((sa.hi * sb.hi - r_hi) + sa.hi * sb.lo + sa.lo * sb.hi) + sa.lo * sb.lo;
            DoubleDouble::new(r_lo, r_hi)
        }
    }

    /// Folds one scalar into a double-double.
    #[inline]
    pub fn accum_d(a: DoubleDouble, b: f64) -> DoubleDouble {
        let mut hi = a.hi;
        let mut lo = a.lo;
        let t = hi;
        hi += b;
        if b.abs() > t.abs() {
            lo += t - (hi - b);
        } else {
            lo += b - (hi - t);
        }
        if lo.is_nan() {
            lo = 0.;
        }
        DoubleDouble::new(lo, hi)
    }

    /// Sums two double-doubles by merging their four limbs in magnitude order.
    pub fn add_dd(a: DoubleDouble, b: DoubleDouble) -> DoubleDouble {
        if is_degenerate(a.hi) || is_degenerate(b.hi) {
            let hi = a.hi + b.hi;
            let mut lo = a.lo + b.lo;
            if lo.is_nan() {
                lo = 0.;
            }
            return DoubleDouble::new(lo, hi);
        }

        let mut terms = [a.hi, b.hi, a.lo, b.lo];
        if terms[0].abs() < terms[1].abs() {
            terms.swap(0, 1);
        }
        if terms[2].abs() < terms[3].abs() {
            terms.swap(2, 3);
        }
        // small head against a large tail
        if terms[1].abs() < terms[2].abs() {
            terms.swap(1, 2);
        }

        let mut hi = terms[2] + terms[3];
        let mut lo = terms[3] - (hi - terms[2]);

        let t = hi;
        hi += terms[1];
        lo += t - (hi - terms[1]);

        let t = hi;
        hi += terms[0];
        lo += t - (hi - terms[0]);

        let t = hi;
        hi += lo;
        lo -= hi - t;
        if lo.is_nan() {
            lo = 0.;
        }
        DoubleDouble::new(lo, hi)
    }

    #[inline]
    pub fn sub_dd(a: DoubleDouble, b: DoubleDouble) -> DoubleDouble {
        DoubleDouble::add_dd(a, -b)
    }

    /// Multiplies two double-doubles from the thirteen significant partial
    /// products of their 26-bit pieces.
    pub fn mul_dd(a: DoubleDouble, b: DoubleDouble) -> DoubleDouble {
        if is_degenerate(a.hi) || is_degenerate(b.hi) {
            return DoubleDouble::new(-0., a.hi * b.hi);
        }

        let [a0, a1, a2, a3] = DoubleDouble::split_dd(a);
        let [b0, b1, b2, b3] = DoubleDouble::split_dd(b);

        // exponent offsets relative to p0: 0, 26, 26, 52, 52, 78, 78, 104 ...
        let p0 = a0 * b0;
        let p1 = a0 * b1;
        let p2 = a1 * b0;
        let p3 = a1 * b1;
        let p4 = a2 * b0;
        let p5 = a2 * b1;
        let p6 = a3 * b0;
        let p7 = a3 * b1;
        let p8 = a0 * b2;
        let p9 = a0 * b3;
        let p10 = a1 * b2;
        let p11 = a1 * b3;
        let p12 = a2 * b2;

        let mut t0 = DoubleDouble::new(p12, p10);
        let mut t1 = DoubleDouble::new(p11, p9);
        let mut t2 = DoubleDouble::new(p7, p6);

        t0 = DoubleDouble::accum_d(t0, p5);

        let mut c0 = t0.hi;
        let mut c1 = t1.hi;
        let mut c2 = t2.hi;
        t0.hi += p3;
        t1.hi += p4;
        t2.hi += p8;
        c0 -= t0.hi - p3;
        c1 -= t1.hi - p4;
        c2 -= t2.hi - p8;
        t0.lo += c0;
        t1.lo += c1;
        t2.lo += c2;

        let mut c1 = t1.hi;
        let mut c2 = t2.hi;
        t1.hi += p1;
        t2.hi += p2;
        c1 -= t1.hi - p1;
        c2 -= t2.hi - p2;
        t1.lo += c1;
        t2.lo += c2;

        let low = DoubleDouble::add_dd(t1, DoubleDouble::add_dd(t2, t0));
        DoubleDouble::accum_d(low, p0)
    }

    #[inline]
    pub fn mul_f64(a: DoubleDouble, b: f64) -> DoubleDouble {
        DoubleDouble::mul_dd(a, DoubleDouble::from_f64(b))
    }

    #[inline]
    pub fn add_f64(a: DoubleDouble, b: f64) -> DoubleDouble {
        DoubleDouble::add_dd(a, DoubleDouble::from_f64(b))
    }

    /// Long division with two correction steps.
    pub fn div_dd(a: DoubleDouble, b: DoubleDouble) -> DoubleDouble {
        if is_degenerate(a.hi) || is_degenerate(b.hi) {
            return DoubleDouble::from_f64(a.hi / b.hi);
        }
        let q0 = a.hi / b.hi;
        if !q0.is_finite() || q0 == 0. {
            return DoubleDouble::from_f64(q0);
        }
        let r = DoubleDouble::sub_dd(a, DoubleDouble::mul_f64(b, q0));
        let q1 = r.hi / b.hi;
        let r = DoubleDouble::sub_dd(r, DoubleDouble::mul_f64(b, q1));
        let q2 = r.hi / b.hi;
        let q = DoubleDouble::from_exact_add(q0, q1);
        DoubleDouble::add_f64(q, q2)
    }

    #[inline]
    pub fn recip(self) -> DoubleDouble {
        DoubleDouble::div_dd(DoubleDouble::from_f64(1.), self)
    }

    /// Square root refined by one Newton step on the residual.
    pub fn sqrt_dd(a: DoubleDouble) -> DoubleDouble {
        if a.hi <= 0. || !a.hi.is_finite() {
            return DoubleDouble::from_f64(a.hi.sqrt());
        }
        let s = a.hi.sqrt();
        let sq = DoubleDouble::exact_mult(s, s);
        let r = DoubleDouble::sub_dd(a, sq);
        let correction = r.hi / (2. * s);
        DoubleDouble::from_exact_add(s, correction)
    }

    /// Multiplies by 2^n, exact unless the result leaves the normal range
    #[inline]
    pub fn ldexp(self, n: i32) -> DoubleDouble {
        DoubleDouble::new(scalbn(self.lo, n), scalbn(self.hi, n))
    }

    /// Rounds to a double whose last bit is set whenever the sum was inexact.
    ///
    /// A round-to-odd double narrows to `f32` or binary16 with a single rounding.
    pub fn to_f64_odd(self) -> f64 {
        let s = DoubleDouble::exact_add(self.hi, self.lo);
        if s.lo == 0. || !s.hi.is_finite() || s.lo.is_nan() {
            return s.hi;
        }
        if s.hi.to_bits() & 1 == 1 {
            return s.hi;
        }
        if s.hi == 0. {
            return s.hi;
        }
        if (s.lo > 0.) == (s.hi > 0.) {
            f64::from_bits(s.hi.to_bits() + 1)
        } else {
            step_toward_zero_f64(s.hi)
        }
    }

    /// Nearest double to `hi + lo`, a NaN low part is ignored
    #[inline]
    pub fn to_f64_nearest(self) -> f64 {
        if self.lo.is_nan() || !self.hi.is_finite() {
            return self.hi;
        }
        self.hi + self.lo
    }

    /// Rounds to `f32` once, as the device would under `policy`.
    pub fn narrow_f32(self, policy: RoundingPolicy) -> f32 {
        let odd = self.to_f64_odd();
        let mut r = odd as f32;
        // an overflow to Inf steps back to the largest finite value
        if policy.is_toward_zero() && !odd.is_nan() && (r as f64).abs() > odd.abs() {
            r = step_toward_zero_f32(r);
        }
        if policy.flushes() && is_subnormal_f32(r) {
            r = 0f32.copysign(r);
        }
        r
    }

    /// Rounds to binary16 bits once, honoring the policy rounding mode.
    pub fn narrow_f16(self, policy: RoundingPolicy) -> u16 {
        let bits = f64_to_f16_bits(self.to_f64_odd(), policy.is_toward_zero());
        if policy.flushes() && bits & 0x7c00 == 0 {
            return bits & 0x8000;
        }
        bits
    }

    /// Rounds toward zero to a double.
    pub fn to_f64_toward_zero(self) -> f64 {
        let s = DoubleDouble::exact_add(self.hi, self.lo);
        if s.lo == 0. || !s.hi.is_finite() || s.lo.is_nan() || s.hi == 0. {
            return s.hi;
        }
        if (s.lo > 0.) != (s.hi > 0.) {
            step_toward_zero_f64(s.hi)
        } else {
            s.hi
        }
    }
}

impl Neg for DoubleDouble {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        DoubleDouble::new(-self.lo, -self.hi)
    }
}

impl Add for DoubleDouble {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        DoubleDouble::add_dd(self, rhs)
    }
}

impl Sub for DoubleDouble {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        DoubleDouble::sub_dd(self, rhs)
    }
}

impl Mul for DoubleDouble {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        DoubleDouble::mul_dd(self, rhs)
    }
}

impl Mul<f64> for DoubleDouble {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        DoubleDouble::mul_f64(self, rhs)
    }
}

impl Div for DoubleDouble {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        DoubleDouble::div_dd(self, rhs)
    }
}

impl From<f64> for DoubleDouble {
    #[inline]
    fn from(value: f64) -> Self {
        DoubleDouble::from_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const SCALE: i32 = 120;

    /// Fixed point value in units of 2^-120, truncated below that
    fn to_fixed(x: f64) -> i128 {
        if x == 0. {
            return 0;
        }
        let bits = x.to_bits();
        let e = ((bits >> 52) & 0x7ff) as i32;
        let m = (bits & 0x000f_ffff_ffff_ffff) | if e != 0 { 1 << 52 } else { 0 };
        let shift = e.max(1) - 1075 + SCALE;
        let v = if shift >= 0 {
            (m as i128) << shift
        } else if shift > -64 {
            (m >> (-shift)) as i128
        } else {
            0
        };
        if x < 0. { -v } else { v }
    }

    fn random_dd(rng: &mut impl Rng) -> DoubleDouble {
        let hi: f64 = rng.random_range(1.0..2.0);
        let hi = if rng.random_bool(0.5) { -hi } else { hi };
        let u: f64 = rng.random_range(-1.0..1.0);
        // |lo| around 2^-54 .. 2^-53 relative to hi
        let lo = hi * f64::from_bits(0x3c90000000000000) * (0.5 + u.abs() * 0.5) * u.signum();
        DoubleDouble::from_exact_add(hi, lo)
    }

    fn two_prod(a: f64, b: f64) -> (f64, f64) {
        let p = a * b;
        (p, a.mul_add(b, -p))
    }

    #[test]
    fn test_split() {
        let v = 1.0 / 3.0;
        let s = DoubleDouble::split(v);
        assert_eq!(s.hi + s.lo, v);
        assert_eq!(s.hi.to_bits() & 0x7ff_ffff, 0);
        let x = DoubleDouble::new(1e-20, 1.0 / 7.0);
        let pieces = DoubleDouble::split_dd(x);
        let sum = DoubleDouble::add_dd(
            DoubleDouble::exact_add(pieces[0], pieces[1]),
            DoubleDouble::exact_add(pieces[2], pieces[3]),
        );
        assert_eq!(sum.hi, x.hi);
        assert!((sum.lo - x.lo).abs() <= 1e-36, "Invalid split {:?}", pieces);
    }

    #[test]
    fn test_add_dd_precision() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let a = random_dd(&mut rng);
            let b = random_dd(&mut rng);
            let exact = to_fixed(a.hi) + to_fixed(a.lo) + to_fixed(b.hi) + to_fixed(b.lo);
            let r = DoubleDouble::add_dd(a, b);
            let got = to_fixed(r.hi) + to_fixed(r.lo);
            let diff = (exact - got).abs();
            // 2^-100 of the larger operand, plus the fixed point truncation
            let magnitude = to_fixed(a.hi).abs().max(to_fixed(b.hi).abs());
            let bound = (magnitude >> 100) + 8;
            assert!(diff <= bound, "Invalid add {:?} + {:?} = {:?}", a, b, r);
        }
    }

    #[test]
    fn test_mul_dd_precision() {
        let mut rng = rand::rng();
        for _ in 0..20000 {
            let a = random_dd(&mut rng);
            let b = random_dd(&mut rng);
            let mut exact = 0i128;
            for (x, y) in [(a.hi, b.hi), (a.hi, b.lo), (a.lo, b.hi), (a.lo, b.lo)] {
                let (p, e) = two_prod(x, y);
                exact += to_fixed(p) + to_fixed(e);
            }
            let r = DoubleDouble::mul_dd(a, b);
            let got = to_fixed(r.hi) + to_fixed(r.lo);
            let diff = (exact - got).abs();
            let bound = (exact.abs() >> 100) + 16;
            assert!(diff <= bound, "Invalid mul {:?} * {:?} = {:?}", a, b, r);
        }
    }

    #[test]
    fn test_exact_mult() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let a: f64 = rng.random_range(-1e10..1e10);
            let b: f64 = rng.random_range(-1e10..1e10);
            let r = DoubleDouble::exact_mult(a, b);
            let (p, e) = two_prod(a, b);
            assert_eq!(r.hi, p);
            assert_eq!(r.lo, e, "Invalid exact product of {a} and {b}");
        }
    }

    #[test]
    fn test_degenerate_operands() {
        let inf = DoubleDouble::from_f64(f64::INFINITY);
        let one = DoubleDouble::new(1e-17, 1.);
        let r = DoubleDouble::add_dd(inf, one);
        assert_eq!(r.hi, f64::INFINITY);
        assert_eq!(r.lo, 1e-17);
        let r = DoubleDouble::add_dd(DoubleDouble::from_f64(f64::INFINITY), -inf);
        assert!(r.hi.is_nan());
        assert_eq!(r.lo, 0.);
        let r = DoubleDouble::mul_dd(DoubleDouble::from_f64(0.), one);
        assert_eq!(r.hi, 0.);
        let r = DoubleDouble::mul_dd(DoubleDouble::from_f64(f64::NAN), one);
        assert!(r.hi.is_nan());
        assert!(DoubleDouble::div_dd(one, DoubleDouble::from_f64(0.)).hi.is_infinite());
    }

    #[test]
    fn test_div_and_sqrt() {
        let three = DoubleDouble::from_f64(3.);
        let third = DoubleDouble::div_dd(DoubleDouble::from_f64(1.), three);
        assert_eq!(third.hi, 1. / 3.);
        let back = DoubleDouble::mul_dd(third, three);
        assert!((back.hi - 1.0 + back.lo).abs() < 1e-30, "Invalid division {:?}", back);

        let two = DoubleDouble::from_f64(2.);
        let s = DoubleDouble::sqrt_dd(two);
        assert_eq!(s.hi, std::f64::consts::SQRT_2);
        let sq = DoubleDouble::mul_dd(s, s);
        assert!((sq.hi - 2.0 + sq.lo).abs() < 1e-30, "Invalid sqrt {:?}", s);
        assert!(DoubleDouble::sqrt_dd(DoubleDouble::from_f64(-1.)).is_nan());
    }

    #[test]
    fn test_narrowing() {
        let nearest = RoundingPolicy::default();
        let toward_zero = RoundingPolicy::toward_zero();
        // 1 + 2^-24 + 2^-80 sits just above the f32 midpoint
        let v = DoubleDouble::new(
            f64::from_bits(0x3af0000000000000),
            1. + f64::from_bits(0x3e70000000000000),
        );
        assert_eq!(v.narrow_f32(nearest), 1. + f32::EPSILON);
        assert_eq!(v.narrow_f32(toward_zero), 1.);
        let huge = DoubleDouble::from_f64(1e300);
        assert_eq!(huge.narrow_f32(nearest), f32::INFINITY);
        assert_eq!(huge.narrow_f32(toward_zero), f32::MAX);
        assert_eq!((-huge).narrow_f32(toward_zero), -f32::MAX);
        assert!(DoubleDouble::from_f64(f64::NAN).narrow_f32(nearest).is_nan());
        let flush = RoundingPolicy {
            denormals: crate::config::DenormalMode::Flush,
            ..Default::default()
        };
        let tiny = DoubleDouble::from_f64(-1e-40);
        assert_eq!(tiny.narrow_f32(flush).to_bits(), (-0f32).to_bits());
        assert_eq!(DoubleDouble::from_f64(1.0).narrow_f16(nearest), 0x3c00);
        assert_eq!(DoubleDouble::from_f64(1e-7).narrow_f16(flush), 0);
        assert_eq!(DoubleDouble::new(-1e-20, 1.0).narrow_f16(toward_zero), 0x3bff);
    }

    #[test]
    fn test_round_to_odd() {
        // 1 + 2^-60 is inexact in double, round to odd lands on 1 + 2^-52
        let v = DoubleDouble::new(f64::from_bits(0x3c30000000000000), 1.);
        let odd = v.to_f64_odd();
        assert_eq!(odd.to_bits(), 1f64.to_bits() + 1);
        assert_eq!(v.to_f64_toward_zero(), 1.0);
        let v = DoubleDouble::new(-f64::from_bits(0x3c30000000000000), 1.);
        assert_eq!(v.to_f64_toward_zero().to_bits(), 1f64.to_bits() - 1);
        assert_eq!(DoubleDouble::from_f64(1.5).to_f64_odd(), 1.5);
    }
}
