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
use crate::math::bits::{FP_ILOGB0, FP_ILOGBNAN};
use log::debug;
use std::hint::black_box;

/// Device profile, selects the embedded tolerances when set
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum Profile {
    #[default]
    Full,
    Embedded,
}

/// Rounding mode of the device for basic arithmetic
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum RoundingMode {
    #[default]
    NearestEven,
    TowardZero,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum DenormalMode {
    #[default]
    Preserve,
    Flush,
}

/// Floating point format of the candidate results
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Precision {
    Half,
    Single,
    Double,
}

impl Precision {
    /// Explicit mantissa bits, the implicit leading one excluded
    pub const fn mantissa_bits(self) -> i32 {
        match self {
            Precision::Half => 10,
            Precision::Single => 23,
            Precision::Double => 52,
        }
    }

    /// Exponent of the smallest normal value
    pub const fn min_exponent(self) -> i32 {
        match self {
            Precision::Half => -14,
            Precision::Single => -126,
            Precision::Double => -1022,
        }
    }

    /// Smallest positive normal value
    pub const fn min_normal(self) -> f64 {
        f64::from_bits(((self.min_exponent() + 1023) as u64) << 52)
    }
}

/// Arithmetic behaviour applied when references are narrowed to the tested precision.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct RoundingPolicy {
    pub rounding: RoundingMode,
    pub denormals: DenormalMode,
}

impl RoundingPolicy {
    /// Inspects the host arithmetic once.
    ///
    /// Rust floating point always rounds to nearest even, so the probe only
    /// confirms it and checks that subnormal results survive.
    pub fn probe() -> RoundingPolicy {
        // 1 + 2^-24 + 2^-47 is above the midpoint, nearest even rounds up
        let one = black_box(1f32);
        let above_half = black_box(f32::from_bits(0x33800001));
        let rounding = if one + above_half > one {
            RoundingMode::NearestEven
        } else {
            RoundingMode::TowardZero
        };
        let smallest_normal = black_box(f32::MIN_POSITIVE);
        let denormals = if smallest_normal * black_box(0.5f32) != 0. {
            DenormalMode::Preserve
        } else {
            DenormalMode::Flush
        };
        let policy = RoundingPolicy {
            rounding,
            denormals,
        };
        debug!("Probed host rounding policy {:?}", policy);
        policy
    }

    /// Policy of a device rounding toward zero, as embedded profiles may do
    pub const fn toward_zero() -> RoundingPolicy {
        RoundingPolicy {
            rounding: RoundingMode::TowardZero,
            denormals: DenormalMode::Preserve,
        }
    }

    #[inline]
    pub const fn is_toward_zero(&self) -> bool {
        matches!(self.rounding, RoundingMode::TowardZero)
    }

    #[inline]
    pub const fn flushes(&self) -> bool {
        matches!(self.denormals, DenormalMode::Flush)
    }
}

/// Describes the device under test and the mode a sweep runs in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OracleConfig {
    pub profile: Profile,
    /// Fast relaxed math, relaxed tolerances and references apply
    pub relaxed: bool,
    /// The relaxed implementation derives functions from others,
    /// `tan` as sin/cos and `exp10` as exp2, which leaves them unchecked
    pub fast_relaxed_derived: bool,
    /// Inf and NaN are outside the device domain, comparisons touching them are skipped
    pub finite_math_only: bool,
    /// Treats every function as requiring flush to zero
    pub force_ftz: bool,
    pub half_denormals: bool,
    pub float_denormals: bool,
    pub double_denormals: bool,
    /// Value the device returns from `ilogb(0)`
    pub ilogb_zero: i32,
    /// Value the device returns from `ilogb(NaN)`
    pub ilogb_nan: i32,
    pub rounding: RoundingPolicy,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            relaxed: false,
            fast_relaxed_derived: true,
            finite_math_only: false,
            force_ftz: false,
            half_denormals: true,
            float_denormals: true,
            double_denormals: true,
            ilogb_zero: FP_ILOGB0,
            ilogb_nan: FP_ILOGBNAN,
            rounding: RoundingPolicy::default(),
        }
    }
}

impl OracleConfig {
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        matches!(self.profile, Profile::Embedded)
    }

    /// Inf and NaN are not checked, either explicitly or because relaxed
    /// mode is in effect for the function under test
    #[inline]
    pub const fn skips_non_finite(&self, relaxed: bool) -> bool {
        self.finite_math_only || relaxed
    }
}
