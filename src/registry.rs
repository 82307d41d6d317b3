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
use crate::config::{OracleConfig, Precision};
use crate::err::OracleError;
use crate::math::double_double::DoubleDouble;
use crate::math::trig;
use crate::reference::{common, double, extended, half, relaxed};
use log::debug;
use std::collections::HashSet;
use std::fmt::Debug;

/// Operand and result layout of a tested function, selects the driver
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `float f(float)`
    Unary,
    /// `int f(float)`
    IntUnary,
    /// `float f(uint)`
    UnaryU,
    /// Relational macro of one operand
    MacroUnary,
    Binary,
    /// Infix operator such as `+`
    BinaryOperator,
    /// `float f(float, int)`
    BinaryInt,
    MacroBinary,
    Ternary,
    /// `float f(float, float *)`
    UnaryTwoResults,
    /// `float f(float, int *)`
    UnaryTwoResultsInt,
    /// `float f(float, float, int *)`
    BinaryTwoResultsInt,
    Mad,
}

impl Shape {
    /// Number of operands the driver feeds to the reference
    pub const fn arity(self) -> usize {
        match self {
            Shape::Unary
            | Shape::IntUnary
            | Shape::UnaryU
            | Shape::MacroUnary
            | Shape::UnaryTwoResults
            | Shape::UnaryTwoResultsInt => 1,
            Shape::Binary
            | Shape::BinaryOperator
            | Shape::BinaryInt
            | Shape::MacroBinary
            | Shape::BinaryTwoResultsInt => 2,
            Shape::Ternary | Shape::Mad => 3,
        }
    }
}

/// Values a reference implementation may produce.
pub trait ReferenceValue: Copy + Debug {
    fn widen(self) -> DoubleDouble;
}

impl ReferenceValue for f64 {
    #[inline]
    fn widen(self) -> DoubleDouble {
        DoubleDouble::from_f64(self)
    }
}

impl ReferenceValue for DoubleDouble {
    #[inline]
    fn widen(self) -> DoubleDouble {
        self
    }
}

/// A reference implementation, one variant per [Shape].
#[derive(Debug, Copy, Clone)]
pub enum Reference<R> {
    Unary(fn(f64) -> R),
    IntUnary(fn(f64) -> i32),
    UnaryU(fn(u64) -> R),
    MacroUnary(fn(f64) -> i32),
    Binary(fn(f64, f64) -> R),
    BinaryOperator(fn(f64, f64) -> R),
    BinaryInt(fn(f64, i32) -> R),
    MacroBinary(fn(f64, f64) -> i32),
    Ternary(fn(f64, f64, f64) -> R),
    UnaryTwoResults(fn(f64) -> (R, R)),
    UnaryTwoResultsInt(fn(f64) -> (R, i32)),
    BinaryTwoResultsInt(fn(f64, f64) -> (R, i32)),
    Mad(fn(f64, f64, f64) -> R),
}

impl<R> Reference<R> {
    pub const fn shape(&self) -> Shape {
        match self {
            Reference::Unary(_) => Shape::Unary,
            Reference::IntUnary(_) => Shape::IntUnary,
            Reference::UnaryU(_) => Shape::UnaryU,
            Reference::MacroUnary(_) => Shape::MacroUnary,
            Reference::Binary(_) => Shape::Binary,
            Reference::BinaryOperator(_) => Shape::BinaryOperator,
            Reference::BinaryInt(_) => Shape::BinaryInt,
            Reference::MacroBinary(_) => Shape::MacroBinary,
            Reference::Ternary(_) => Shape::Ternary,
            Reference::UnaryTwoResults(_) => Shape::UnaryTwoResults,
            Reference::UnaryTwoResultsInt(_) => Shape::UnaryTwoResultsInt,
            Reference::BinaryTwoResultsInt(_) => Shape::BinaryTwoResultsInt,
            Reference::Mad(_) => Shape::Mad,
        }
    }
}

/// Allowed error in ulps per precision and profile
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerance {
    pub float_ulps: f32,
    pub double_ulps: f32,
    pub float_embedded_ulps: f32,
    pub relaxed_ulps: f32,
    pub relaxed_embedded_ulps: f32,
    pub half_ulps: f32,
}

impl Tolerance {
    fn values(&self) -> [f32; 6] {
        [
            self.float_ulps,
            self.double_ulps,
            self.float_embedded_ulps,
            self.relaxed_ulps,
            self.relaxed_embedded_ulps,
            self.half_ulps,
        ]
    }
}

/// How a function is judged under fast relaxed math.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RelaxedRule {
    /// Relaxed mode uses the regular reference and tolerance
    Disabled,
    /// Relaxed reference within the relaxed tolerance
    Ulps,
    /// Absolute error for `|x| <= bound`, inputs beyond the bound are not checked
    Absolute { bound: f64 },
    /// `3 + floor(|2x|)` ulps in the full profile
    ExpScaled,
    /// Unchecked when the implementation is derived from other builtins
    Derived,
    /// Absolute error on `[0.5, 2]`, the regular tolerance elsewhere
    LogAbsolute,
    /// Operand magnitudes outside `[min, max]` are not checked
    Domain { min: f64, max: f64 },
}

/// Everything the drivers need to know about one tested function.
#[derive(Debug, Clone)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    /// Spelling in device code, an operator for the arithmetic entries
    pub code_name: &'static str,
    pub shape: Shape,
    /// Reference for single and half precision candidates
    pub reference: Option<Reference<f64>>,
    /// Reference for double precision candidates
    pub extended: Option<Reference<DoubleDouble>>,
    pub relaxed: Option<Reference<f64>>,
    /// Replaces [FunctionDescriptor::reference] for half precision
    pub half: Option<Reference<f64>>,
    pub tolerance: Tolerance,
    pub ftz: bool,
    pub relaxed_rule: RelaxedRule,
    /// Results within this magnitude pass for `|x| > 2^16`
    pub range_limit: Option<f32>,
    /// The extended reference is only accurate to half a double ulp
    pub double_only_accurate: bool,
}

impl FunctionDescriptor {
    fn new(
        name: &'static str,
        float_ulps: f32,
        float_embedded_ulps: f32,
        reference: Reference<f64>,
        extended: Option<Reference<DoubleDouble>>,
    ) -> FunctionDescriptor {
        let half_ulps = if float_ulps == 0. || float_ulps.is_infinite() {
            float_ulps
        } else {
            2.
        };
        FunctionDescriptor {
            name,
            code_name: name,
            shape: reference.shape(),
            reference: Some(reference),
            extended,
            relaxed: None,
            half: None,
            tolerance: Tolerance {
                float_ulps,
                double_ulps: float_ulps,
                float_embedded_ulps,
                relaxed_ulps: f32::INFINITY,
                relaxed_embedded_ulps: f32::INFINITY,
                half_ulps,
            },
            ftz: false,
            relaxed_rule: RelaxedRule::Disabled,
            range_limit: None,
            double_only_accurate: false,
        }
    }

    fn with_relaxed(
        mut self,
        ulps: f32,
        embedded_ulps: f32,
        rule: RelaxedRule,
        reference: Reference<f64>,
    ) -> Self {
        self.tolerance.relaxed_ulps = ulps;
        self.tolerance.relaxed_embedded_ulps = embedded_ulps;
        self.relaxed_rule = rule;
        self.relaxed = Some(reference);
        self
    }

    fn with_code_name(mut self, code_name: &'static str) -> Self {
        self.code_name = code_name;
        self
    }

    fn with_half(mut self, reference: Reference<f64>) -> Self {
        self.half = Some(reference);
        self
    }

    fn double_only(mut self) -> Self {
        self.double_only_accurate = true;
        self
    }

    /// Tolerance applied to candidates of `precision` under `config`
    pub fn allowed_ulps(&self, precision: Precision, config: &OracleConfig) -> f32 {
        match precision {
            Precision::Half => self.tolerance.half_ulps,
            Precision::Double => self.tolerance.double_ulps,
            Precision::Single => {
                if config.relaxed && self.relaxed_rule != RelaxedRule::Disabled {
                    if config.is_embedded() {
                        self.tolerance.relaxed_embedded_ulps
                    } else {
                        self.tolerance.relaxed_ulps
                    }
                } else if config.is_embedded() {
                    self.tolerance.float_embedded_ulps
                } else {
                    self.tolerance.float_ulps
                }
            }
        }
    }

    /// `true` when subnormal results and operands may legally flush to zero
    pub fn flushes(&self, precision: Precision, config: &OracleConfig) -> bool {
        let denormals = match precision {
            Precision::Half => config.half_denormals,
            Precision::Single => config.float_denormals,
            Precision::Double => config.double_denormals,
        };
        self.ftz || config.force_ftz || !denormals
    }

    /// `true` when relaxed mode swaps in the relaxed reference and rule
    pub fn is_relaxed(&self, precision: Precision, config: &OracleConfig) -> bool {
        precision == Precision::Single
            && config.relaxed
            && self.relaxed_rule != RelaxedRule::Disabled
    }

    fn validate(&self) -> Result<(), OracleError> {
        let shape_of = |r: Shape| -> Result<(), OracleError> {
            if r != self.shape {
                return Err(OracleError::ShapeMismatch {
                    name: self.name.to_string(),
                    shape: self.shape,
                });
            }
            Ok(())
        };
        match self.reference {
            Some(r) => shape_of(r.shape())?,
            None => return Err(OracleError::MissingReference(self.name.to_string())),
        }
        if let Some(r) = self.extended {
            shape_of(r.shape())?;
        }
        if let Some(r) = self.half {
            shape_of(r.shape())?;
        }
        match self.relaxed {
            Some(r) => shape_of(r.shape())?,
            None if self.relaxed_rule != RelaxedRule::Disabled => {
                return Err(OracleError::MissingReference(self.name.to_string()));
            }
            None => {}
        }
        for value in self.tolerance.values() {
            if value.is_nan() || value < 0. {
                return Err(OracleError::InvalidTolerance {
                    name: self.name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

// 2^-11
const RELAXED_TRIG_ULPS: f32 = 0.00048828125;
// 2^-21
const RELAXED_LOG_ULPS: f32 = 4.76837158203125e-7;
const NATIVE_ULPS: f32 = 8192.;

fn native(
    name: &'static str,
    reference: Reference<f64>,
    range_limit: Option<f32>,
) -> FunctionDescriptor {
    let mut d = FunctionDescriptor::new(name, NATIVE_ULPS, NATIVE_ULPS, reference, None);
    d.tolerance.half_ulps = NATIVE_ULPS;
    d.ftz = true;
    d.range_limit = range_limit;
    d
}

fn descriptors() -> Vec<FunctionDescriptor> {
    use Reference as R;
    use std::f64::consts::PI;
    type Fd = FunctionDescriptor;

    let half_trig_limit = 1. + NATIVE_ULPS * f32::EPSILON / 2.;
    let divide_domain = RelaxedRule::Domain {
        // 2^-62, 2^62
        min: f64::from_bits(0x3c10000000000000),
        max: f64::from_bits(0x43d0000000000000),
    };

    vec![
        Fd::new("acos", 4., 4., R::Unary(pxfm::f_acos), Some(R::Unary(extended::acos)))
            .with_relaxed(4096., 4096., RelaxedRule::Ulps, R::Unary(pxfm::f_acos))
            .double_only(),
        Fd::new("acosh", 4., 4., R::Unary(pxfm::f_acosh), Some(R::Unary(extended::acosh)))
            .double_only(),
        Fd::new("acospi", 5., 5., R::Unary(pxfm::f_acospi), Some(R::Unary(extended::acospi)))
            .double_only(),
        Fd::new("asin", 4., 4., R::Unary(pxfm::f_asin), Some(R::Unary(extended::asin)))
            .with_relaxed(4096., 4096., RelaxedRule::Ulps, R::Unary(pxfm::f_asin))
            .double_only(),
        Fd::new("asinh", 4., 4., R::Unary(pxfm::f_asinh), Some(R::Unary(extended::asinh)))
            .double_only(),
        Fd::new("asinpi", 5., 5., R::Unary(pxfm::f_asinpi), Some(R::Unary(extended::asinpi)))
            .double_only(),
        Fd::new("atan", 5., 5., R::Unary(pxfm::f_atan), Some(R::Unary(extended::atan)))
            .with_relaxed(4096., 4096., RelaxedRule::Ulps, R::Unary(pxfm::f_atan))
            .double_only(),
        Fd::new("atanh", 5., 5., R::Unary(pxfm::f_atanh), Some(R::Unary(extended::atanh)))
            .double_only(),
        Fd::new("atanpi", 5., 5., R::Unary(pxfm::f_atanpi), Some(R::Unary(extended::atanpi)))
            .double_only(),
        Fd::new("atan2", 6., 6., R::Binary(pxfm::f_atan2), Some(R::Binary(extended::atan2)))
            .double_only(),
        Fd::new("atan2pi", 6., 6., R::Binary(pxfm::f_atan2pi), Some(R::Binary(extended::atan2pi)))
            .double_only(),
        Fd::new("cbrt", 2., 4., R::Unary(double::cbrt), Some(R::Unary(extended::cbrt))),
        Fd::new("ceil", 0., 0., R::Unary(common::ceil), Some(R::Unary(extended::ceil))),
        Fd::new("copysign", 0., 0., R::Binary(common::copysign), Some(R::Binary(extended::copysign))),
        Fd::new("cos", 4., 4., R::Unary(trig::cos_reference), Some(R::Unary(extended::cos)))
            .with_relaxed(
                RELAXED_TRIG_ULPS,
                RELAXED_TRIG_ULPS,
                RelaxedRule::Absolute { bound: PI },
                R::Unary(relaxed::cos),
            )
            .double_only(),
        Fd::new("cosh", 4., 4., R::Unary(pxfm::f_cosh), Some(R::Unary(extended::cosh)))
            .double_only(),
        Fd::new("cospi", 4., 4., R::Unary(trig::cospi_reference), Some(R::Unary(extended::cospi)))
            .with_relaxed(
                RELAXED_TRIG_ULPS,
                RELAXED_TRIG_ULPS,
                RelaxedRule::Absolute { bound: 1. },
                R::Unary(trig::cospi_reference),
            )
            .double_only(),
        Fd::new("exp", 3., 4., R::Unary(double::exp), Some(R::Unary(extended::exp)))
            .with_relaxed(3., 4., RelaxedRule::ExpScaled, R::Unary(double::exp)),
        Fd::new("exp2", 3., 4., R::Unary(double::exp2), Some(R::Unary(extended::exp2)))
            .with_relaxed(3., 4., RelaxedRule::ExpScaled, R::Unary(double::exp2)),
        Fd::new("exp10", 3., 4., R::Unary(double::exp10), Some(R::Unary(extended::exp10)))
            .with_relaxed(8192., 8192., RelaxedRule::Derived, R::Unary(double::exp10)),
        Fd::new("expm1", 3., 4., R::Unary(pxfm::f_expm1), Some(R::Unary(extended::expm1)))
            .double_only(),
        Fd::new("fabs", 0., 0., R::Unary(common::fabs), Some(R::Unary(extended::fabs))),
        Fd::new("fdim", 0., 0., R::Binary(double::fdim), Some(R::Binary(extended::fdim))),
        Fd::new("floor", 0., 0., R::Unary(common::floor), Some(R::Unary(extended::floor))),
        Fd::new("fma", 0., 0., R::Ternary(double::fma), Some(R::Ternary(extended::fma))),
        Fd::new("fmax", 0., 0., R::Binary(common::fmax), Some(R::Binary(extended::fmax))),
        Fd::new("fmin", 0., 0., R::Binary(common::fmin), Some(R::Binary(extended::fmin))),
        Fd::new("fmod", 0., 0., R::Binary(double::fmod), Some(R::Binary(extended::fmod))),
        Fd::new(
            "fract",
            0.,
            0.,
            R::UnaryTwoResults(double::fract),
            Some(R::UnaryTwoResults(extended::fract)),
        ),
        Fd::new(
            "frexp",
            0.,
            0.,
            R::UnaryTwoResultsInt(double::frexp),
            Some(R::UnaryTwoResultsInt(extended::frexp)),
        ),
        Fd::new("hypot", 4., 4., R::Binary(double::hypot), Some(R::Binary(extended::hypot))),
        Fd::new(
            "ilogb",
            0.,
            0.,
            R::IntUnary(double::ilogb),
            Some(R::IntUnary(crate::math::bits::ilogb)),
        ),
        Fd::new("isequal", 0., 0., R::MacroBinary(common::isequal), Some(R::MacroBinary(common::isequal))),
        Fd::new("isfinite", 0., 0., R::MacroUnary(common::isfinite), Some(R::MacroUnary(common::isfinite))),
        Fd::new("isgreater", 0., 0., R::MacroBinary(common::isgreater), Some(R::MacroBinary(common::isgreater))),
        Fd::new(
            "isgreaterequal",
            0.,
            0.,
            R::MacroBinary(common::isgreaterequal),
            Some(R::MacroBinary(common::isgreaterequal)),
        ),
        Fd::new("isinf", 0., 0., R::MacroUnary(common::isinf), Some(R::MacroUnary(common::isinf))),
        Fd::new("isless", 0., 0., R::MacroBinary(common::isless), Some(R::MacroBinary(common::isless))),
        Fd::new(
            "islessequal",
            0.,
            0.,
            R::MacroBinary(common::islessequal),
            Some(R::MacroBinary(common::islessequal)),
        ),
        Fd::new(
            "islessgreater",
            0.,
            0.,
            R::MacroBinary(common::islessgreater),
            Some(R::MacroBinary(common::islessgreater)),
        ),
        Fd::new("isnan", 0., 0., R::MacroUnary(common::isnan), Some(R::MacroUnary(common::isnan))),
        Fd::new("isnormal", 0., 0., R::MacroUnary(double::isnormal), Some(R::MacroUnary(extended::isnormal)))
            .with_half(R::MacroUnary(half::isnormal)),
        Fd::new(
            "isnotequal",
            0.,
            0.,
            R::MacroBinary(common::isnotequal),
            Some(R::MacroBinary(common::isnotequal)),
        ),
        Fd::new("isordered", 0., 0., R::MacroBinary(common::isordered), Some(R::MacroBinary(common::isordered))),
        Fd::new(
            "isunordered",
            0.,
            0.,
            R::MacroBinary(common::isunordered),
            Some(R::MacroBinary(common::isunordered)),
        ),
        Fd::new("ldexp", 0., 0., R::BinaryInt(double::ldexp), Some(R::BinaryInt(extended::ldexp))),
        Fd::new(
            "lgamma",
            f32::INFINITY,
            f32::INFINITY,
            R::Unary(double::lgamma),
            Some(R::Unary(extended::lgamma)),
        )
        .double_only(),
        Fd::new(
            "lgamma_r",
            f32::INFINITY,
            f32::INFINITY,
            R::UnaryTwoResultsInt(double::lgamma_r),
            Some(R::UnaryTwoResultsInt(extended::lgamma_r)),
        )
        .double_only(),
        Fd::new("log", 3., 4., R::Unary(double::log), Some(R::Unary(extended::log)))
            .with_relaxed(
                RELAXED_LOG_ULPS,
                RELAXED_LOG_ULPS,
                RelaxedRule::LogAbsolute,
                R::Unary(relaxed::log),
            ),
        Fd::new("log2", 3., 4., R::Unary(double::log2), Some(R::Unary(extended::log2)))
            .with_relaxed(
                RELAXED_LOG_ULPS,
                RELAXED_LOG_ULPS,
                RelaxedRule::LogAbsolute,
                R::Unary(double::log2),
            ),
        Fd::new("log10", 3., 4., R::Unary(double::log10), Some(R::Unary(extended::log10)))
            .with_relaxed(
                RELAXED_LOG_ULPS,
                RELAXED_LOG_ULPS,
                RelaxedRule::LogAbsolute,
                R::Unary(double::log10),
            ),
        Fd::new("log1p", 2., 4., R::Unary(pxfm::f_log1p), Some(R::Unary(extended::log1p)))
            .double_only(),
        Fd::new("logb", 0., 0., R::Unary(common::logb), Some(R::Unary(extended::logb))),
        Fd::new(
            "mad",
            f32::INFINITY,
            f32::INFINITY,
            R::Mad(common::mad),
            Some(R::Mad(extended::mad)),
        )
        .with_relaxed(f32::INFINITY, f32::INFINITY, RelaxedRule::Ulps, R::Mad(relaxed::mad)),
        Fd::new("maxmag", 0., 0., R::Binary(common::maxmag), Some(R::Binary(extended::maxmag))),
        Fd::new("minmag", 0., 0., R::Binary(common::minmag), Some(R::Binary(extended::minmag))),
        Fd::new(
            "modf",
            0.,
            0.,
            R::UnaryTwoResults(common::modf),
            Some(R::UnaryTwoResults(extended::modf)),
        ),
        Fd::new("nan", 0., 0., R::UnaryU(double::nan), Some(R::UnaryU(extended::nan)))
            .with_half(R::UnaryU(half::nan)),
        Fd::new("nextafter", 0., 0., R::Binary(double::nextafter), Some(R::Binary(extended::nextafter)))
            .with_half(R::Binary(half::nextafter)),
        Fd::new("pow", 16., 16., R::Binary(double::pow), Some(R::Binary(extended::pow)))
            .with_relaxed(8192., 8192., RelaxedRule::Derived, R::Binary(relaxed::pow)),
        Fd::new("pown", 16., 16., R::BinaryInt(double::pown), Some(R::BinaryInt(extended::pown))),
        Fd::new("powr", 16., 16., R::Binary(double::powr), Some(R::Binary(extended::powr))),
        Fd::new("remainder", 0., 0., R::Binary(double::remainder), Some(R::Binary(extended::remainder))),
        Fd::new(
            "remquo",
            0.,
            0.,
            R::BinaryTwoResultsInt(double::remquo),
            Some(R::BinaryTwoResultsInt(extended::remquo)),
        ),
        Fd::new("rint", 0., 0., R::Unary(common::rint), Some(R::Unary(extended::rint))),
        Fd::new("rootn", 16., 16., R::BinaryInt(double::rootn), Some(R::BinaryInt(extended::rootn))),
        Fd::new("round", 0., 0., R::Unary(common::round), Some(R::Unary(extended::round))),
        Fd::new("rsqrt", 2., 4., R::Unary(double::rsqrt), Some(R::Unary(extended::rsqrt))),
        Fd::new("signbit", 0., 0., R::MacroUnary(common::signbit), Some(R::MacroUnary(common::signbit))),
        Fd::new("sin", 4., 4., R::Unary(trig::sin_reference), Some(R::Unary(extended::sin)))
            .with_relaxed(
                RELAXED_TRIG_ULPS,
                RELAXED_TRIG_ULPS,
                RelaxedRule::Absolute { bound: PI },
                R::Unary(relaxed::sin),
            )
            .double_only(),
        Fd::new(
            "sincos",
            4.,
            4.,
            R::UnaryTwoResults(trig::sincos_reference),
            Some(R::UnaryTwoResults(extended::sincos)),
        )
        .with_relaxed(
            RELAXED_TRIG_ULPS,
            RELAXED_TRIG_ULPS,
            RelaxedRule::Absolute { bound: PI },
            R::UnaryTwoResults(relaxed::sincos),
        )
        .double_only(),
        Fd::new("sinh", 4., 4., R::Unary(pxfm::f_sinh), Some(R::Unary(extended::sinh)))
            .double_only(),
        Fd::new("sinpi", 4., 4., R::Unary(trig::sinpi_reference), Some(R::Unary(extended::sinpi)))
            .with_relaxed(
                RELAXED_TRIG_ULPS,
                RELAXED_TRIG_ULPS,
                RelaxedRule::Absolute { bound: 1. },
                R::Unary(trig::sinpi_reference),
            )
            .double_only(),
        {
            let mut sqrt =
                Fd::new("sqrt", 3., 4., R::Unary(double::sqrt), Some(R::Unary(extended::sqrt)));
            sqrt.tolerance.double_ulps = 0.;
            sqrt
        },
        Fd::new("sqrt_cr", 0., 0., R::Unary(double::sqrt), Some(R::Unary(extended::sqrt)))
            .with_code_name("sqrt"),
        Fd::new("tan", 5., 5., R::Unary(trig::tan_reference), Some(R::Unary(extended::tan)))
            .with_relaxed(8192., 8192., RelaxedRule::Derived, R::Unary(relaxed::tan))
            .double_only(),
        Fd::new("tanh", 5., 5., R::Unary(pxfm::f_tanh), Some(R::Unary(extended::tanh)))
            .double_only(),
        Fd::new("tanpi", 6., 6., R::Unary(trig::tanpi_reference), Some(R::Unary(extended::tanpi)))
            .double_only(),
        Fd::new("trunc", 0., 0., R::Unary(common::trunc), Some(R::Unary(extended::trunc))),
        native("half_cos", R::Unary(trig::cos_reference), Some(half_trig_limit)),
        native("half_divide", R::Binary(double::divide), None),
        native("half_exp", R::Unary(double::exp), None),
        native("half_exp2", R::Unary(double::exp2), None),
        native("half_exp10", R::Unary(double::exp10), None),
        native("half_log", R::Unary(double::log), None),
        native("half_log2", R::Unary(double::log2), None),
        native("half_log10", R::Unary(double::log10), None),
        native("half_powr", R::Binary(double::powr), None),
        native("half_recip", R::Unary(double::recip), None),
        native("half_rsqrt", R::Unary(double::rsqrt), None),
        native("half_sin", R::Unary(trig::sin_reference), Some(half_trig_limit)),
        native("half_sqrt", R::Unary(double::sqrt), None),
        native("half_tan", R::Unary(trig::tan_reference), Some(f32::INFINITY)),
        Fd::new("add", 0., 0., R::BinaryOperator(double::add), Some(R::BinaryOperator(extended::add)))
            .with_code_name("+"),
        Fd::new(
            "subtract",
            0.,
            0.,
            R::BinaryOperator(double::subtract),
            Some(R::BinaryOperator(extended::subtract)),
        )
        .with_code_name("-"),
        {
            let mut divide = Fd::new(
                "divide",
                2.5,
                3.,
                R::BinaryOperator(double::divide),
                Some(R::BinaryOperator(extended::divide)),
            )
            .with_relaxed(2.5, f32::INFINITY, divide_domain, R::BinaryOperator(relaxed::divide))
            .with_code_name("/");
            divide.tolerance.double_ulps = 0.;
            divide
        },
        {
            let mut divide_cr = Fd::new(
                "divide_cr",
                0.,
                0.,
                R::BinaryOperator(double::divide),
                Some(R::BinaryOperator(extended::divide)),
            )
            .with_code_name("/");
            divide_cr.tolerance.relaxed_ulps = 0.;
            divide_cr
        },
        Fd::new(
            "multiply",
            0.,
            0.,
            R::BinaryOperator(double::multiply),
            Some(R::BinaryOperator(extended::multiply)),
        )
        .with_code_name("*"),
        Fd::new("assignment", 0., 0., R::Unary(common::assignment), Some(R::Unary(extended::assignment)))
            .with_code_name(""),
        Fd::new("not", 0., 0., R::MacroUnary(common::not), Some(R::MacroUnary(common::not)))
            .with_code_name("!"),
    ]
}

/// Immutable table of every tested function, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    entries: Vec<FunctionDescriptor>,
}

impl FunctionRegistry {
    pub fn new() -> Result<FunctionRegistry, OracleError> {
        FunctionRegistry::from_descriptors(descriptors())
    }

    /// Validates names, shapes and tolerances of `entries`.
    pub fn from_descriptors(
        entries: Vec<FunctionDescriptor>,
    ) -> Result<FunctionRegistry, OracleError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in entries.iter() {
            if !seen.insert(entry.name) {
                return Err(OracleError::DuplicateFunction(entry.name.to_string()));
            }
            entry.validate()?;
        }
        debug!("Function registry built with {} entries", entries.len());
        Ok(FunctionRegistry { entries })
    }

    pub fn get(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.entries.iter().find(|x| x.name == name)
    }

    pub fn lookup(&self, name: &str) -> Result<&FunctionDescriptor, OracleError> {
        self.get(name)
            .ok_or_else(|| OracleError::UnknownFunction(name.to_string()))
    }

    pub fn by_shape(&self, shape: Shape) -> impl Iterator<Item = &FunctionDescriptor> {
        self.entries.iter().filter(move |x| x.shape == shape)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionDescriptor> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;

    #[test]
    fn test_registry_builds() {
        let registry = FunctionRegistry::new().unwrap();
        assert!(registry.len() > 90, "Registry has only {} entries", registry.len());
        let pow = registry.lookup("pow").unwrap();
        assert_eq!(pow.shape, Shape::Binary);
        assert_eq!(pow.tolerance.float_ulps, 16.);
        assert!(registry.lookup("erf").is_err());
        assert_eq!(registry.lookup("add").unwrap().code_name, "+");
        assert_eq!(registry.lookup("sqrt_cr").unwrap().code_name, "sqrt");
        assert!(registry.lookup("half_sin").unwrap().ftz);
        assert_eq!(registry.by_shape(Shape::BinaryTwoResultsInt).count(), 1);
        assert_eq!(registry.by_shape(Shape::Mad).count(), 1);
        for entry in registry.iter() {
            assert_eq!(entry.shape.arity(), entry.reference.unwrap().shape().arity());
        }
    }

    #[test]
    fn test_allowed_ulps() {
        let registry = FunctionRegistry::new().unwrap();
        let exp = registry.lookup("exp").unwrap();
        let mut config = OracleConfig::default();
        assert_eq!(exp.allowed_ulps(Precision::Single, &config), 3.);
        assert_eq!(exp.allowed_ulps(Precision::Half, &config), 2.);
        config.profile = Profile::Embedded;
        assert_eq!(exp.allowed_ulps(Precision::Single, &config), 4.);
        config.profile = Profile::Full;
        config.relaxed = true;
        let sin = registry.lookup("sin").unwrap();
        assert_eq!(sin.allowed_ulps(Precision::Single, &config), RELAXED_TRIG_ULPS);
        assert_eq!(sin.allowed_ulps(Precision::Double, &config), 4.);
        let sqrt = registry.lookup("sqrt").unwrap();
        assert_eq!(sqrt.allowed_ulps(Precision::Single, &config), 3.);
        assert_eq!(sqrt.allowed_ulps(Precision::Double, &config), 0.);
        assert!(registry.lookup("half_cos").unwrap().range_limit.unwrap() > 1.);
    }

    #[test]
    fn test_validation() {
        let mut entries = descriptors();
        entries.push(entries[0].clone());
        assert_eq!(
            FunctionRegistry::from_descriptors(entries).unwrap_err(),
            OracleError::DuplicateFunction("acos".to_string())
        );
        let mut bad = FunctionDescriptor::new(
            "bad",
            1.,
            1.,
            Reference::Unary(common::fabs),
            Some(Reference::Binary(extended::fmax)),
        );
        assert!(matches!(
            FunctionRegistry::from_descriptors(vec![bad.clone()]),
            Err(OracleError::ShapeMismatch { .. })
        ));
        bad.extended = None;
        bad.tolerance.float_ulps = f32::NAN;
        assert!(matches!(
            FunctionRegistry::from_descriptors(vec![bad.clone()]),
            Err(OracleError::InvalidTolerance { .. })
        ));
        bad.tolerance.float_ulps = 1.;
        bad.relaxed_rule = RelaxedRule::Ulps;
        assert_eq!(
            FunctionRegistry::from_descriptors(vec![bad]).unwrap_err(),
            OracleError::MissingReference("bad".to_string())
        );
    }
}
