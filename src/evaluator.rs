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
use crate::config::{OracleConfig, Precision, RoundingPolicy};
use crate::err::OracleError;
use crate::math::bits::{f64_to_f16_bits, is_subnormal_f64};
use crate::math::double_double::DoubleDouble;
use crate::registry::{FunctionDescriptor, Reference, ReferenceValue, RelaxedRule, Shape};
use crate::ulp::{
    abs_error, is_operand_subnormal, is_result_subnormal, is_result_subnormal_abs, ulp_error,
};
use log::{trace, warn};
use std::fmt::Debug;

const MAX_OPERANDS: usize = 3;
// 2^16
const RANGE_LIMITED_ABOVE: f64 = 65536.;

/// How the distance between candidate and reference is measured
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ErrorMetric {
    #[default]
    Ulps,
    Absolute,
}

/// Outcome of one comparison
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Verdict {
    /// Signed error in ulps, or the absolute error
    pub error: f32,
    pub passed: bool,
    /// The inputs are outside what the device must handle, nothing was compared
    pub skipped: bool,
}

impl Verdict {
    #[inline]
    pub const fn pass(error: f32) -> Verdict {
        Verdict {
            error,
            passed: true,
            skipped: false,
        }
    }

    #[inline]
    pub const fn skipped() -> Verdict {
        Verdict {
            error: 0.,
            passed: true,
            skipped: true,
        }
    }
}

/// Recomputes the reference for substituted operands
pub type Recompute<'a> = &'a dyn Fn(&[f64]) -> DoubleDouble;

/// Context of a comparison beyond the two values.
#[derive(Copy, Clone)]
pub struct InputsInfo<'a> {
    /// Operands exactly as the candidate received them
    pub operands: &'a [f64],
    pub precision: Precision,
    pub metric: ErrorMetric,
    pub skip_non_finite: bool,
    /// Relaxed mode retries flushed results and operands without an FTZ requirement
    pub relaxed: bool,
    /// Widen double errors by the half ulp the reference may be off
    pub double_only: bool,
    pub policy: RoundingPolicy,
    pub recompute: Option<Recompute<'a>>,
}

impl<'a> InputsInfo<'a> {
    pub fn new(operands: &'a [f64], precision: Precision) -> InputsInfo<'a> {
        InputsInfo {
            operands,
            precision,
            metric: ErrorMetric::Ulps,
            skip_non_finite: false,
            relaxed: false,
            double_only: false,
            policy: RoundingPolicy::default(),
            recompute: None,
        }
    }

    pub fn with_recompute(mut self, recompute: Recompute<'a>) -> Self {
        self.recompute = Some(recompute);
        self
    }
}

/// Compares a candidate against a reference rounded to the tested precision.
///
/// Exact matches pass outright. Otherwise the signed error must be within
/// `tolerance`, unless `ftz` (or relaxed mode) allows a subnormal reference
/// to flush to zero, or allows subnormal operands to have been read as `±0`.
pub fn evaluate(
    reference: f64,
    candidate: f64,
    tolerance: f32,
    ftz: bool,
    info: &InputsInfo,
) -> Verdict {
    evaluate_extended(
        DoubleDouble::from_f64(reference),
        candidate,
        tolerance,
        ftz,
        info,
    )
}

/// [evaluate] against a double-double reference
pub fn evaluate_extended(
    reference: DoubleDouble,
    candidate: f64,
    tolerance: f32,
    ftz: bool,
    info: &InputsInfo,
) -> Verdict {
    match info.recompute {
        Some(f) => {
            let single: &dyn Fn(&[f64]) -> [DoubleDouble; 1] = &|ops: &[f64]| [f(ops)];
            judge([reference], [candidate], tolerance, ftz, info, Some(single))
        }
        None => judge([reference], [candidate], tolerance, ftz, info, None),
    }
}

fn narrows_to(
    reference: DoubleDouble,
    candidate: f64,
    precision: Precision,
    policy: RoundingPolicy,
) -> bool {
    match precision {
        Precision::Half => {
            let r = reference.narrow_f16(policy);
            let c = f64_to_f16_bits(candidate, false);
            r == c || (r & 0x7fff > 0x7c00 && c & 0x7fff > 0x7c00)
        }
        Precision::Single => {
            let r = reference.narrow_f32(policy);
            let c = candidate as f32;
            r.to_bits() == c.to_bits() || (r.is_nan() && c.is_nan())
        }
        Precision::Double => {
            let mut r = if policy.is_toward_zero() {
                reference.to_f64_toward_zero()
            } else {
                reference.to_f64_nearest()
            };
            if policy.flushes() && is_subnormal_f64(r) {
                r = 0f64.copysign(r);
            }
            r.to_bits() == candidate.to_bits() || (r.is_nan() && candidate.is_nan())
        }
    }
}

#[inline]
fn measure(candidate: f64, reference: DoubleDouble, info: &InputsInfo) -> f32 {
    match info.metric {
        ErrorMetric::Ulps => ulp_error(info.precision, candidate, reference, info.double_only),
        ErrorMetric::Absolute => abs_error(candidate, reference.to_f64_odd()),
    }
}

/// Accepts zero candidates for references that may be flushed subnormals,
/// every other component must be within tolerance on its own.
fn accept_flushed<const N: usize>(
    references: &[DoubleDouble; N],
    candidates: &[f64; N],
    errors: &[f32; N],
    tolerance: f32,
    info: &InputsInfo,
) -> Option<[f32; N]> {
    let mut accepted = *errors;
    let mut flushed = false;
    for i in 0..N {
        let r = references[i].to_f64_odd();
        // relaxed mode measures the flush window absolutely for every metric
        let subnormal = if info.relaxed || matches!(info.metric, ErrorMetric::Absolute) {
            is_result_subnormal_abs(info.precision, r, tolerance)
        } else {
            is_result_subnormal(info.precision, r, tolerance)
        };
        if subnormal {
            if candidates[i] != 0. {
                return None;
            }
            accepted[i] = 0.;
            flushed = true;
        } else if !(errors[i].abs() <= tolerance) {
            return None;
        }
    }
    if flushed { Some(accepted) } else { None }
}

/// Visits every copy of `operands` where a non-empty subset of the subnormal
/// operands is replaced by signed zeros, until `visit` returns `false`.
fn for_each_flushed(operands: &[f64], precision: Precision, mut visit: impl FnMut(&[f64]) -> bool) {
    let n = operands.len().min(MAX_OPERANDS);
    let mut subnormals = 0u32;
    for (i, &x) in operands[..n].iter().enumerate() {
        if is_operand_subnormal(precision, x) {
            subnormals |= 1 << i;
        }
    }
    let mut alternate = [0f64; MAX_OPERANDS];
    let mut subset = subnormals;
    while subset != 0 {
        for signs in 0..(1u32 << subset.count_ones()) {
            alternate[..n].copy_from_slice(&operands[..n]);
            let mut sign_bit = 0;
            for (i, v) in alternate[..n].iter_mut().enumerate() {
                if subset & (1 << i) != 0 {
                    *v = if signs & (1 << sign_bit) != 0 { -0. } else { 0. };
                    sign_bit += 1;
                }
            }
            if !visit(&alternate[..n]) {
                return;
            }
        }
        subset = (subset - 1) & subnormals;
    }
}

fn judge<const N: usize>(
    references: [DoubleDouble; N],
    candidates: [f64; N],
    tolerance: f32,
    ftz: bool,
    info: &InputsInfo,
    recompute: Option<&dyn Fn(&[f64]) -> [DoubleDouble; N]>,
) -> Verdict {
    if references
        .iter()
        .zip(candidates.iter())
        .all(|(&r, &c)| narrows_to(r, c, info.precision, info.policy))
    {
        return Verdict::pass(0.);
    }
    if info.skip_non_finite
        && (references.iter().any(|r| !r.is_finite())
            || info.operands.iter().any(|x| !x.is_finite()))
    {
        return Verdict::skipped();
    }

    let within = |e: f32| e.abs() <= tolerance;
    let mut errors = [0f32; N];
    for i in 0..N {
        errors[i] = measure(candidates[i], references[i], info);
    }
    let mut failed = !errors.iter().all(|&e| within(e));

    if failed && (ftz || info.relaxed) {
        if let Some(accepted) = accept_flushed(&references, &candidates, &errors, tolerance, info)
        {
            trace!("Accepted flushed result for reference {:?}", references);
            failed = false;
            errors = accepted;
        }
        if let Some(recompute) = recompute {
            let mut skipped = false;
            for_each_flushed(info.operands, info.precision, |alternate| {
                let alternate_refs = recompute(alternate);
                if info.skip_non_finite && alternate_refs.iter().any(|r| !r.is_finite()) {
                    skipped = true;
                    return false;
                }
                let mut alternate_errors = [0f32; N];
                for i in 0..N {
                    alternate_errors[i] = measure(candidates[i], alternate_refs[i], info);
                }
                if alternate_errors.iter().all(|&e| within(e)) {
                    trace!("Accepted candidate for flushed operands {:?}", alternate);
                    failed = false;
                } else if let Some(accepted) = accept_flushed(
                    &alternate_refs,
                    &candidates,
                    &alternate_errors,
                    tolerance,
                    info,
                ) {
                    trace!("Accepted flushed result for flushed operands {:?}", alternate);
                    failed = false;
                    alternate_errors = accepted;
                }
                for (e, a) in errors.iter_mut().zip(alternate_errors.iter()) {
                    if a.abs() < e.abs() || e.is_nan() {
                        *e = *a;
                    }
                }
                true
            });
            if skipped {
                return Verdict::skipped();
            }
        }
    }

    let error = errors.iter().fold(0f32, |acc, &e| {
        if e.abs() > acc.abs() || e.is_nan() {
            e
        } else {
            acc
        }
    });
    Verdict {
        error,
        passed: !failed,
        skipped: false,
    }
}

struct Judgement {
    tolerance: f32,
    metric: ErrorMetric,
    relaxed: bool,
    skip: bool,
}

#[derive(Copy, Clone)]
enum Picked {
    Narrow(Reference<f64>),
    Wide(Reference<DoubleDouble>),
}

/// Runs the comparison for each descriptor shape in one precision.
///
/// Candidates are passed widened to `f64`; they must be exactly
/// representable in the precision the evaluator was built for.
#[derive(Debug, Copy, Clone)]
pub struct Evaluator {
    config: OracleConfig,
    precision: Precision,
}

impl Evaluator {
    pub fn new(config: OracleConfig, precision: Precision) -> Evaluator {
        Evaluator { config, precision }
    }

    #[inline]
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    fn mismatch(d: &FunctionDescriptor, operands: usize) -> OracleError {
        if d.shape.arity() != operands {
            return OracleError::ArityMismatch {
                name: d.name.to_string(),
                expected: d.shape.arity(),
                found: operands,
            };
        }
        OracleError::ShapeMismatch {
            name: d.name.to_string(),
            shape: d.shape,
        }
    }

    fn pick(&self, d: &FunctionDescriptor) -> Result<Picked, OracleError> {
        let missing = || OracleError::MissingReference(d.name.to_string());
        match self.precision {
            Precision::Double => d.extended.map(Picked::Wide).ok_or_else(missing),
            Precision::Half => d.half.or(d.reference).map(Picked::Narrow).ok_or_else(missing),
            Precision::Single => {
                let reference = if d.is_relaxed(self.precision, &self.config) {
                    d.relaxed
                } else {
                    d.reference
                };
                reference.map(Picked::Narrow).ok_or_else(missing)
            }
        }
    }

    fn judgement(&self, d: &FunctionDescriptor, operands: &[f64]) -> Judgement {
        let relaxed = d.is_relaxed(self.precision, &self.config);
        let mut judgement = Judgement {
            tolerance: d.allowed_ulps(self.precision, &self.config),
            metric: ErrorMetric::Ulps,
            relaxed,
            skip: false,
        };
        if !relaxed {
            return judgement;
        }
        let x = operands.first().copied().unwrap_or(0.);
        match d.relaxed_rule {
            RelaxedRule::Disabled | RelaxedRule::Ulps => {}
            RelaxedRule::Absolute { bound } => {
                if x.abs() <= bound {
                    judgement.metric = ErrorMetric::Absolute;
                } else {
                    judgement.skip = true;
                }
            }
            RelaxedRule::ExpScaled => {
                if !self.config.is_embedded() {
                    judgement.tolerance = 3. + (2. * x).abs().floor() as f32;
                }
            }
            RelaxedRule::Derived => judgement.skip = self.config.fast_relaxed_derived,
            RelaxedRule::LogAbsolute => {
                if (0.5..=2.).contains(&x) {
                    judgement.metric = ErrorMetric::Absolute;
                } else if self.config.is_embedded() {
                    judgement.tolerance = d.tolerance.float_embedded_ulps;
                } else {
                    judgement.tolerance = d.tolerance.float_ulps;
                }
            }
            RelaxedRule::Domain { min, max } => {
                judgement.skip = operands.iter().any(|v| !(min..=max).contains(&v.abs()));
            }
        }
        judgement
    }

    fn inputs<'a>(
        &self,
        d: &FunctionDescriptor,
        operands: &'a [f64],
        judgement: &Judgement,
    ) -> InputsInfo<'a> {
        InputsInfo {
            operands,
            precision: self.precision,
            metric: judgement.metric,
            skip_non_finite: self.config.skips_non_finite(judgement.relaxed),
            relaxed: judgement.relaxed,
            double_only: self.precision == Precision::Double && d.double_only_accurate,
            policy: self.config.rounding,
            recompute: None,
        }
    }

    fn report(
        &self,
        d: &FunctionDescriptor,
        operands: &[f64],
        expected: impl Debug,
        found: impl Debug,
        verdict: Verdict,
    ) -> Verdict {
        if !verdict.passed {
            warn!(
                "{} ({:?}) failed at {:?}: expected {:?}, found {:?}, error {}",
                d.name, self.precision, operands, expected, found, verdict.error
            );
        }
        verdict
    }

    fn check(
        &self,
        d: &FunctionDescriptor,
        operands: &[f64],
        reference: DoubleDouble,
        candidate: f64,
        recompute: Recompute,
    ) -> Verdict {
        let judgement = self.judgement(d, operands);
        if judgement.skip {
            trace!("{} not checked at {:?} in relaxed mode", d.name, operands);
            return Verdict::skipped();
        }
        let ftz = d.flushes(self.precision, &self.config);
        let info = self.inputs(d, operands, &judgement).with_recompute(recompute);
        let mut verdict = evaluate_extended(reference, candidate, judgement.tolerance, ftz, &info);

        if !verdict.passed && ftz && d.code_name == "nextafter" && operands.len() == 2 {
            let x = operands[0];
            if x == 0. || is_operand_subnormal(self.precision, x) {
                let smallest = self.precision.min_normal().copysign(operands[1]);
                if candidate == smallest {
                    trace!("{} accepted the smallest normal after flushed {}", d.name, x);
                    verdict = Verdict::pass(0.);
                }
            }
        }
        if let (false, Some(limit)) = (verdict.passed, d.range_limit) {
            let x = operands.first().copied().unwrap_or(0.);
            if x.is_finite() && x.abs() > RANGE_LIMITED_ABOVE && candidate.abs() <= limit as f64 {
                trace!("{} within its range limit at {}", d.name, x);
                verdict = Verdict::pass(0.);
            }
        }
        self.report(d, operands, reference, candidate, verdict)
    }

    fn check_exact(
        &self,
        d: &FunctionDescriptor,
        operands: &[f64],
        expected: &dyn Fn(&[f64]) -> i32,
        candidate: i32,
    ) -> Verdict {
        if self.config.finite_math_only && operands.iter().any(|x| !x.is_finite()) {
            return Verdict::skipped();
        }
        let reference = expected(operands);
        if reference == candidate {
            return Verdict::pass(0.);
        }
        let mut passed = false;
        if d.flushes(self.precision, &self.config) {
            for_each_flushed(operands, self.precision, |alternate| {
                passed = expected(alternate) == candidate;
                !passed
            });
        }
        let verdict = if passed {
            trace!("{} accepted for flushed operands {:?}", d.name, operands);
            Verdict::pass(0.)
        } else {
            Verdict {
                error: (candidate as i64 - reference as i64) as f32,
                passed: false,
                skipped: false,
            }
        };
        self.report(d, operands, reference, candidate, verdict)
    }

    fn unary_with<R: ReferenceValue>(
        &self,
        d: &FunctionDescriptor,
        f: fn(f64) -> R,
        x: f64,
        candidate: f64,
    ) -> Verdict {
        self.check(d, &[x], f(x).widen(), candidate, &|o: &[f64]| {
            f(o[0]).widen()
        })
    }

    /// `float f(float)`
    pub fn unary(
        &self,
        d: &FunctionDescriptor,
        x: f64,
        candidate: f64,
    ) -> Result<Verdict, OracleError> {
        match self.pick(d)? {
            Picked::Narrow(Reference::Unary(f)) => Ok(self.unary_with(d, f, x, candidate)),
            Picked::Wide(Reference::Unary(f)) => Ok(self.unary_with(d, f, x, candidate)),
            _ => Err(Self::mismatch(d, 1)),
        }
    }

    /// `float nan(uint)`
    pub fn unary_u(
        &self,
        d: &FunctionDescriptor,
        payload: u64,
        candidate: f64,
    ) -> Result<Verdict, OracleError> {
        let reference = match self.pick(d)? {
            Picked::Narrow(Reference::UnaryU(f)) => f(payload).widen(),
            Picked::Wide(Reference::UnaryU(f)) => f(payload).widen(),
            _ => return Err(Self::mismatch(d, 1)),
        };
        let judgement = self.judgement(d, &[]);
        let info = self.inputs(d, &[], &judgement);
        let verdict = evaluate_extended(reference, candidate, judgement.tolerance, false, &info);
        Ok(self.report(d, &[payload as f64], reference, candidate, verdict))
    }

    /// `int ilogb(float)`, zero and NaN map to the configured device values
    pub fn int_unary(
        &self,
        d: &FunctionDescriptor,
        x: f64,
        candidate: i32,
    ) -> Result<Verdict, OracleError> {
        let f = match self.pick(d)? {
            Picked::Narrow(Reference::IntUnary(f)) | Picked::Wide(Reference::IntUnary(f)) => f,
            _ => return Err(Self::mismatch(d, 1)),
        };
        let (zero, nan) = (self.config.ilogb_zero, self.config.ilogb_nan);
        let expected = |o: &[f64]| {
            let x = o[0];
            if x == 0. {
                zero
            } else if x.is_nan() {
                nan
            } else {
                f(x)
            }
        };
        Ok(self.check_exact(d, &[x], &expected, candidate))
    }

    /// Relational macro of one operand, scalar true is 1
    pub fn macro_unary(
        &self,
        d: &FunctionDescriptor,
        x: f64,
        candidate: i32,
    ) -> Result<Verdict, OracleError> {
        let f = match self.pick(d)? {
            Picked::Narrow(Reference::MacroUnary(f)) | Picked::Wide(Reference::MacroUnary(f)) => f,
            _ => return Err(Self::mismatch(d, 1)),
        };
        Ok(self.check_exact(d, &[x], &|o: &[f64]| f(o[0]), candidate))
    }

    /// Relational macro of two operands, scalar true is 1
    pub fn macro_binary(
        &self,
        d: &FunctionDescriptor,
        x: f64,
        y: f64,
        candidate: i32,
    ) -> Result<Verdict, OracleError> {
        let f = match self.pick(d)? {
            Picked::Narrow(Reference::MacroBinary(f)) | Picked::Wide(Reference::MacroBinary(f)) => f,
            _ => return Err(Self::mismatch(d, 2)),
        };
        Ok(self.check_exact(d, &[x, y], &|o: &[f64]| f(o[0], o[1]), candidate))
    }

    fn binary_with<R: ReferenceValue>(
        &self,
        d: &FunctionDescriptor,
        f: fn(f64, f64) -> R,
        x: f64,
        y: f64,
        candidate: f64,
    ) -> Verdict {
        self.check(d, &[x, y], f(x, y).widen(), candidate, &|o: &[f64]| {
            f(o[0], o[1]).widen()
        })
    }

    /// `float f(float, float)` and the infix operators
    pub fn binary(
        &self,
        d: &FunctionDescriptor,
        x: f64,
        y: f64,
        candidate: f64,
    ) -> Result<Verdict, OracleError> {
        match self.pick(d)? {
            Picked::Narrow(Reference::Binary(f) | Reference::BinaryOperator(f)) => {
                Ok(self.binary_with(d, f, x, y, candidate))
            }
            Picked::Wide(Reference::Binary(f) | Reference::BinaryOperator(f)) => {
                Ok(self.binary_with(d, f, x, y, candidate))
            }
            _ => Err(Self::mismatch(d, 2)),
        }
    }

    fn binary_int_with<R: ReferenceValue>(
        &self,
        d: &FunctionDescriptor,
        f: fn(f64, i32) -> R,
        x: f64,
        n: i32,
        candidate: f64,
    ) -> Verdict {
        // the integer rides along as an operand that never flushes
        self.check(d, &[x, n as f64], f(x, n).widen(), candidate, &|o: &[f64]| {
            f(o[0], o[1] as i32).widen()
        })
    }

    /// `float f(float, int)`
    pub fn binary_int(
        &self,
        d: &FunctionDescriptor,
        x: f64,
        n: i32,
        candidate: f64,
    ) -> Result<Verdict, OracleError> {
        match self.pick(d)? {
            Picked::Narrow(Reference::BinaryInt(f)) => Ok(self.binary_int_with(d, f, x, n, candidate)),
            Picked::Wide(Reference::BinaryInt(f)) => Ok(self.binary_int_with(d, f, x, n, candidate)),
            _ => Err(Self::mismatch(d, 2)),
        }
    }

    fn ternary_with<R: ReferenceValue>(
        &self,
        d: &FunctionDescriptor,
        f: fn(f64, f64, f64) -> R,
        operands: [f64; 3],
        candidate: f64,
    ) -> Verdict {
        let [a, b, c] = operands;
        let reference = f(a, b, c).widen();
        let mut verdict = self.check(d, &operands, reference, candidate, &|o: &[f64]| {
            f(o[0], o[1], o[2]).widen()
        });
        // mad only has to be consistent about NaN
        if d.shape == Shape::Mad
            && !verdict.passed
            && d.allowed_ulps(self.precision, &self.config).is_infinite()
            && (!candidate.is_nan() || reference.is_nan())
        {
            verdict = Verdict::pass(0.);
        }
        verdict
    }

    /// `float f(float, float, float)` and `mad`
    pub fn ternary(
        &self,
        d: &FunctionDescriptor,
        a: f64,
        b: f64,
        c: f64,
        candidate: f64,
    ) -> Result<Verdict, OracleError> {
        match self.pick(d)? {
            Picked::Narrow(Reference::Ternary(f) | Reference::Mad(f)) => {
                Ok(self.ternary_with(d, f, [a, b, c], candidate))
            }
            Picked::Wide(Reference::Ternary(f) | Reference::Mad(f)) => {
                Ok(self.ternary_with(d, f, [a, b, c], candidate))
            }
            _ => Err(Self::mismatch(d, 3)),
        }
    }

    fn two_results_with<R: ReferenceValue>(
        &self,
        d: &FunctionDescriptor,
        f: fn(f64) -> (R, R),
        x: f64,
        candidate: (f64, f64),
    ) -> Verdict {
        let operands = [x];
        let judgement = self.judgement(d, &operands);
        if judgement.skip {
            return Verdict::skipped();
        }
        let (a, b) = f(x);
        let references = [a.widen(), b.widen()];
        let recompute: &dyn Fn(&[f64]) -> [DoubleDouble; 2] = &|o: &[f64]| {
            let (a, b) = f(o[0]);
            [a.widen(), b.widen()]
        };
        let info = self.inputs(d, &operands, &judgement);
        let verdict = judge(
            references,
            [candidate.0, candidate.1],
            judgement.tolerance,
            d.flushes(self.precision, &self.config),
            &info,
            Some(recompute),
        );
        self.report(d, &operands, references, candidate, verdict)
    }

    /// `float f(float, float *)`, both results are checked
    pub fn unary_two_results(
        &self,
        d: &FunctionDescriptor,
        x: f64,
        candidate: (f64, f64),
    ) -> Result<Verdict, OracleError> {
        match self.pick(d)? {
            Picked::Narrow(Reference::UnaryTwoResults(f)) => {
                Ok(self.two_results_with(d, f, x, candidate))
            }
            Picked::Wide(Reference::UnaryTwoResults(f)) => {
                Ok(self.two_results_with(d, f, x, candidate))
            }
            _ => Err(Self::mismatch(d, 1)),
        }
    }

    fn with_int_result(
        &self,
        d: &FunctionDescriptor,
        operands: &[f64],
        reference: DoubleDouble,
        candidate: f64,
        recompute: Recompute,
    ) -> Verdict {
        let judgement = self.judgement(d, operands);
        if judgement.skip {
            return Verdict::skipped();
        }
        let ftz = d.flushes(self.precision, &self.config);
        let info = self.inputs(d, operands, &judgement).with_recompute(recompute);
        evaluate_extended(reference, candidate, judgement.tolerance, ftz, &info)
    }

    fn two_results_int_with<R: ReferenceValue>(
        &self,
        d: &FunctionDescriptor,
        f: fn(f64) -> (R, i32),
        x: f64,
        candidate: (f64, i32),
    ) -> Verdict {
        let (value, exponent) = f(x);
        let mut verdict = self.with_int_result(d, &[x], value.widen(), candidate.0, &|o: &[f64]| {
            f(o[0]).0.widen()
        });
        // the integer is unspecified for non-finite input and unchecked under an infinite tolerance
        let int_checked =
            x.is_finite() && !d.allowed_ulps(self.precision, &self.config).is_infinite();
        if !verdict.skipped && int_checked && candidate.1 != exponent {
            let flushed = d.flushes(self.precision, &self.config)
                && is_operand_subnormal(self.precision, x)
                && candidate.1 == f(0.).1;
            if !flushed {
                verdict.passed = false;
            }
        }
        self.report(d, &[x], (value, exponent), candidate, verdict)
    }

    /// `float f(float, int *)`
    pub fn unary_two_results_int(
        &self,
        d: &FunctionDescriptor,
        x: f64,
        candidate: (f64, i32),
    ) -> Result<Verdict, OracleError> {
        match self.pick(d)? {
            Picked::Narrow(Reference::UnaryTwoResultsInt(f)) => {
                Ok(self.two_results_int_with(d, f, x, candidate))
            }
            Picked::Wide(Reference::UnaryTwoResultsInt(f)) => {
                Ok(self.two_results_int_with(d, f, x, candidate))
            }
            _ => Err(Self::mismatch(d, 1)),
        }
    }

    fn binary_two_results_int_with<R: ReferenceValue>(
        &self,
        d: &FunctionDescriptor,
        f: fn(f64, f64) -> (R, i32),
        x: f64,
        y: f64,
        candidate: (f64, i32),
    ) -> Verdict {
        let operands = [x, y];
        let (value, quotient) = f(x, y);
        let mut verdict =
            self.with_int_result(d, &operands, value.widen(), candidate.0, &|o: &[f64]| {
                f(o[0], o[1]).0.widen()
            });
        let defined = !(x.is_infinite() || y == 0. || x.is_nan() || y.is_nan());
        // only the low seven bits of the quotient are required
        if !verdict.skipped && defined && (candidate.1 & 0x7f) != (quotient & 0x7f) {
            let flushed = d.flushes(self.precision, &self.config)
                && (is_operand_subnormal(self.precision, x)
                    || is_operand_subnormal(self.precision, y));
            if !flushed {
                verdict.passed = false;
            }
        }
        self.report(d, &operands, (value, quotient), candidate, verdict)
    }

    /// `float remquo(float, float, int *)`
    pub fn binary_two_results_int(
        &self,
        d: &FunctionDescriptor,
        x: f64,
        y: f64,
        candidate: (f64, i32),
    ) -> Result<Verdict, OracleError> {
        match self.pick(d)? {
            Picked::Narrow(Reference::BinaryTwoResultsInt(f)) => {
                Ok(self.binary_two_results_int_with(d, f, x, y, candidate))
            }
            Picked::Wide(Reference::BinaryTwoResultsInt(f)) => {
                Ok(self.binary_two_results_int_with(d, f, x, y, candidate))
            }
            _ => Err(Self::mismatch(d, 2)),
        }
    }
}

/// Worst error and failure count over a run, one per worker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorTracker {
    pub max_error: f32,
    pub max_error_inputs: Vec<f64>,
    pub failures: u64,
    pub checked: u64,
    pub skipped: u64,
}

impl ErrorTracker {
    pub fn new() -> ErrorTracker {
        ErrorTracker::default()
    }

    pub fn record(&mut self, verdict: Verdict, inputs: &[f64]) {
        if verdict.skipped {
            self.skipped += 1;
            return;
        }
        self.checked += 1;
        if !verdict.passed {
            self.failures += 1;
        }
        if verdict.error.abs() > self.max_error.abs() {
            self.max_error = verdict.error;
            self.max_error_inputs.clear();
            self.max_error_inputs.extend_from_slice(inputs);
        }
    }

    /// Folds the results of another worker into this one
    pub fn merge(&mut self, other: &ErrorTracker) {
        self.failures += other.failures;
        self.checked += other.checked;
        self.skipped += other.skipped;
        if other.max_error.abs() > self.max_error.abs() {
            self.max_error = other.max_error;
            self.max_error_inputs.clear();
            self.max_error_inputs
                .extend_from_slice(&other.max_error_inputs);
        }
    }

    #[inline]
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bits::{f16_to_f32, f64_to_f16_bits};
    use crate::math::trig::sincos_reference;
    use crate::reference::{double, extended};
    use crate::registry::FunctionRegistry;
    use rand::Rng;

    fn narrow(x: f64) -> f64 {
        DoubleDouble::from_f64(x).narrow_f32(RoundingPolicy::default()) as f64
    }

    fn step(x: f64, ulps: i32) -> f64 {
        f32::from_bits(((x as f32).to_bits() as i32 + ulps) as u32) as f64
    }

    fn setup(config: OracleConfig, precision: Precision) -> (FunctionRegistry, Evaluator) {
        (
            FunctionRegistry::new().unwrap(),
            Evaluator::new(config, precision),
        )
    }

    #[test]
    fn test_identity_passes() {
        let mut rng = rand::rng();
        for _ in 0..10000 {
            let r = rng.random_range(-1e30..1e30);
            for precision in [Precision::Single, Precision::Double] {
                let info = InputsInfo::new(&[], precision);
                let tolerance = rng.random_range(0f32..4f32);
                let verdict = evaluate(r, r, tolerance, false, &info);
                assert!(verdict.passed, "{} failed against itself in {:?}", r, precision);
                assert_eq!(verdict.error, 0.);
            }
        }
    }

    #[test]
    fn test_flushed_result() {
        let info = InputsInfo::new(&[], Precision::Single);
        let verdict = evaluate(1e-40, 0., 0., true, &info);
        assert!(verdict.passed);
        assert_eq!(verdict.error, 0.);
        assert!(!evaluate(1e-40, 0., 0., false, &info).passed);
        assert!(!evaluate(1e-30, 0., 0., true, &info).passed);
    }

    #[test]
    fn test_flushed_operand() {
        let x = 1e-40f32 as f64;
        let operands = [x];
        // 2^100
        let scale = f64::from_bits(0x4630000000000000);
        let f = |o: &[f64]| DoubleDouble::from_f64(o[0] * scale);
        let info = InputsInfo::new(&operands, Precision::Single).with_recompute(&f);
        let verdict = evaluate(x * scale, 0., 0., true, &info);
        assert!(verdict.passed);
        assert_eq!(verdict.error, 0.);
        assert!(!evaluate(x * scale, 0., 0., false, &info).passed);
    }

    #[test]
    fn test_flushed_combinations() {
        let mut visited = Vec::new();
        for_each_flushed(&[1e-40, 1., -1e-41], Precision::Single, |alternate| {
            visited.push(alternate.to_vec());
            true
        });
        // {x, z} with four sign patterns, {x} and {z} with two each
        assert_eq!(visited.len(), 8);
        assert!(visited.iter().all(|v| v[1] == 1.));
        assert!(visited.contains(&vec![-0., 1., 0.]));
        let mut count = 0;
        for_each_flushed(&[1., 2.], Precision::Single, |_| {
            count += 1;
            true
        });
        assert_eq!(count, 0);
    }

    #[test]
    fn test_skip_non_finite() {
        let operands = [f64::INFINITY];
        let mut info = InputsInfo::new(&operands, Precision::Single);
        assert!(!evaluate(0., 5., 1., false, &info).passed);
        info.skip_non_finite = true;
        assert!(evaluate(0., 5., 1., false, &info).skipped);
        let finite = [1.];
        info.operands = &finite;
        assert!(evaluate(f64::NAN, 5., 1., false, &info).skipped);
        assert!(!evaluate(1., 5., 1., false, &info).passed);

        let finite = OracleConfig {
            finite_math_only: true,
            ..Default::default()
        };
        let (registry, evaluator) = setup(finite, Precision::Single);
        let exp = registry.lookup("exp").unwrap();
        assert!(evaluator.unary(exp, f64::INFINITY, 5.).unwrap().skipped);
        let (_, evaluator) = setup(OracleConfig::default(), Precision::Single);
        let verdict = evaluator.unary(exp, f64::INFINITY, 5.).unwrap();
        assert!(!verdict.passed && !verdict.skipped);
    }

    #[test]
    fn test_pair_flush() {
        let info = InputsInfo::new(&[], Precision::Single);
        let references = [DoubleDouble::from_f64(1e-40), DoubleDouble::from_f64(1.)];
        let next = f32::from_bits(1f32.to_bits() + 1) as f64;
        let verdict = judge(references, [0., next], 2., true, &info, None);
        assert!(verdict.passed);
        assert_eq!(verdict.error, 2.);
        let verdict = judge(references, [0., step(1., 4)], 2., true, &info, None);
        assert!(!verdict.passed);
    }

    #[test]
    fn test_unary_single() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Single);
        let sqrt = registry.lookup("sqrt").unwrap();
        let exp = registry.lookup("exp").unwrap();
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let x = rng.random_range(0f32..1e6f32);
            let verdict = evaluator.unary(sqrt, x as f64, x.sqrt() as f64).unwrap();
            assert!(verdict.passed, "sqrt({}) rejected", x);
            let x = rng.random_range(0.1f32..0.6f32) as f64;
            let correct = narrow(double::exp(x));
            assert!(evaluator.unary(exp, x, step(correct, 2)).unwrap().passed);
            assert!(evaluator.unary(exp, x, step(correct, -2)).unwrap().passed);
            assert!(!evaluator.unary(exp, x, step(correct, 5)).unwrap().passed);
        }
    }

    #[test]
    fn test_binary_double() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Double);
        let add = registry.lookup("add").unwrap();
        let multiply = registry.lookup("multiply").unwrap();
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let x = rng.random_range(-1e10..1e10);
            let y = rng.random_range(-1e10..1e10);
            assert!(evaluator.binary(add, x, y, x + y).unwrap().passed);
            assert!(evaluator.binary(multiply, x, y, x * y).unwrap().passed);
            let off = f64::from_bits((x * y).to_bits() + 1);
            assert!(!evaluator.binary(multiply, x, y, off).unwrap().passed);
        }

        // a*b overflows, the fused sum does not
        let fma = registry.lookup("fma").unwrap();
        let (a, b, c) = (f64::MAX, 1.0625, -f64::MAX);
        let verdict = evaluator.ternary(fma, a, b, c, a.mul_add(b, c)).unwrap();
        assert!(verdict.passed);
        assert_eq!(verdict.error, 0.);
        assert!(!evaluator.ternary(fma, a, b, c, f64::INFINITY).unwrap().passed);
    }

    #[test]
    fn test_double_only_reference() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Double);
        let sin = registry.lookup("sin").unwrap();
        let correct = extended::sin(1.).to_f64_nearest();
        assert!(evaluator.unary(sin, 1., correct).unwrap().passed);
        let next = f64::from_bits(correct.to_bits() + 1);
        let verdict = evaluator.unary(sin, 1., next).unwrap();
        assert!(verdict.passed);
        assert!(verdict.error > 0.5, "Error {}", verdict.error);
    }

    #[test]
    fn test_ilogb() {
        let config = OracleConfig {
            ilogb_zero: -i32::MAX,
            ..Default::default()
        };
        let (registry, evaluator) = setup(config, Precision::Single);
        let ilogb = registry.lookup("ilogb").unwrap();
        assert!(evaluator.int_unary(ilogb, 0., -i32::MAX).unwrap().passed);
        assert!(!evaluator.int_unary(ilogb, 0., i32::MIN).unwrap().passed);
        assert!(evaluator.int_unary(ilogb, 8., 3).unwrap().passed);
        assert!(!evaluator.int_unary(ilogb, 8., 2).unwrap().passed);
        assert!(evaluator.int_unary(ilogb, f64::NAN, i32::MAX).unwrap().passed);
        let x = 1e-40f32 as f64;
        assert!(evaluator.int_unary(ilogb, x, -133).unwrap().passed);
        assert!(!evaluator.int_unary(ilogb, x, -i32::MAX).unwrap().passed);

        let flushing = OracleConfig {
            float_denormals: false,
            ..config
        };
        let evaluator = Evaluator::new(flushing, Precision::Single);
        assert!(evaluator.int_unary(ilogb, x, -i32::MAX).unwrap().passed);
    }

    #[test]
    fn test_macros() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Single);
        let isequal = registry.lookup("isequal").unwrap();
        assert!(evaluator.macro_binary(isequal, 1., 1., 1).unwrap().passed);
        assert!(!evaluator.macro_binary(isequal, 1., 1., 0).unwrap().passed);
        assert!(evaluator.macro_binary(isequal, f64::NAN, 1., 0).unwrap().passed);
        let isnan = registry.lookup("isnan").unwrap();
        assert!(evaluator.macro_unary(isnan, f64::NAN, 1).unwrap().passed);
        let not = registry.lookup("not").unwrap();
        assert!(evaluator.macro_unary(not, 0., 1).unwrap().passed);
        assert!(evaluator.macro_unary(isequal, 1., 1).is_err());
    }

    #[test]
    fn test_int_outputs() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Single);
        let remquo = registry.lookup("remquo").unwrap();
        assert!(evaluator.binary_two_results_int(remquo, 5., 3., (-1., 2 + 128)).unwrap().passed);
        assert!(!evaluator.binary_two_results_int(remquo, 5., 3., (-1., 3)).unwrap().passed);
        assert!(!evaluator.binary_two_results_int(remquo, 5., 3., (1., 2)).unwrap().passed);
        // the quotient is undefined for a zero divisor
        assert!(evaluator.binary_two_results_int(remquo, 5., 0., (f64::NAN, 77)).unwrap().passed);

        let frexp = registry.lookup("frexp").unwrap();
        assert!(evaluator.unary_two_results_int(frexp, 8., (0.5, 4)).unwrap().passed);
        assert!(!evaluator.unary_two_results_int(frexp, 8., (0.5, 3)).unwrap().passed);
        assert!(evaluator
            .unary_two_results_int(frexp, f64::INFINITY, (f64::INFINITY, 12))
            .unwrap()
            .passed);
    }

    #[test]
    fn test_two_results() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Single);
        let sincos = registry.lookup("sincos").unwrap();
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let x = rng.random_range(-10f32..10f32) as f64;
            let (s, c) = sincos_reference(x);
            let verdict = evaluator.unary_two_results(sincos, x, (narrow(s), narrow(c))).unwrap();
            assert!(verdict.passed, "sincos({}) rejected", x);
        }
        let modf = registry.lookup("modf").unwrap();
        assert!(evaluator.unary_two_results(modf, -2.5, (-0.5, -2.)).unwrap().passed);
        assert!(!evaluator.unary_two_results(modf, -2.5, (-0.5, -3.)).unwrap().passed);
    }

    #[test]
    fn test_relaxed_rules() {
        let config = OracleConfig {
            relaxed: true,
            ..Default::default()
        };
        let (registry, evaluator) = setup(config, Precision::Single);
        let sin = registry.lookup("sin").unwrap();
        assert!(evaluator.unary(sin, 4., 100.).unwrap().skipped);
        let verdict = evaluator.unary(sin, 1., 1f32.sin() as f64).unwrap();
        assert!(verdict.passed && !verdict.skipped);
        let tan = registry.lookup("tan").unwrap();
        assert!(evaluator.unary(tan, 1., 100.).unwrap().skipped);
        let divide = registry.lookup("divide").unwrap();
        assert!(evaluator.binary(divide, 1e30, 1., 0.).unwrap().skipped);
        assert!(evaluator.binary(divide, 3., 2., 1.5).unwrap().passed);
        let exp = registry.lookup("exp").unwrap();
        let correct = narrow(double::exp(10.));
        assert!(evaluator.unary(exp, 10., step(correct, 20)).unwrap().passed);
        assert!(!evaluator.unary(exp, 10., step(correct, 30)).unwrap().passed);
        // non-finite values are outside the relaxed domain
        assert!(evaluator.unary(exp, 1000., 1.).unwrap().skipped);

        let strict = OracleConfig {
            fast_relaxed_derived: false,
            ..config
        };
        let evaluator = Evaluator::new(strict, Precision::Single);
        assert!(!evaluator.unary(tan, 1., 100.).unwrap().skipped);
    }

    #[test]
    fn test_relaxed_flush_window() {
        let config = OracleConfig {
            relaxed: true,
            ..Default::default()
        };
        let (registry, evaluator) = setup(config, Precision::Single);
        let exp = registry.lookup("exp").unwrap();
        let verdict = evaluator.unary(exp, -80., 0.).unwrap();
        assert!(verdict.passed && !verdict.skipped);
        assert_eq!(verdict.error, 0.);
        assert!(!evaluator.unary(exp, -80., 1.).unwrap().passed);

        let (_, strict) = setup(OracleConfig::default(), Precision::Single);
        assert!(!strict.unary(exp, -80., 0.).unwrap().passed);

        // the absolute window applies to ulp-measured results in relaxed mode
        let mut info = InputsInfo::new(&[], Precision::Single);
        info.relaxed = true;
        assert!(evaluate(1e-35, 0., 163., false, &info).passed);
        info.relaxed = false;
        assert!(!evaluate(1e-35, 0., 163., true, &info).passed);
    }

    #[test]
    fn test_nextafter_flushed() {
        let config = OracleConfig {
            float_denormals: false,
            ..Default::default()
        };
        let (registry, evaluator) = setup(config, Precision::Single);
        let nextafter = registry.lookup("nextafter").unwrap();
        let smallest = f32::MIN_POSITIVE as f64;
        assert!(evaluator.binary(nextafter, 0., 1., smallest).unwrap().passed);
        assert!(evaluator.binary(nextafter, -0., -1., -smallest).unwrap().passed);
        assert!(!evaluator.binary(nextafter, 0., 1., 1.).unwrap().passed);
        let evaluator = Evaluator::new(OracleConfig::default(), Precision::Single);
        assert!(!evaluator.binary(nextafter, 0., 1., smallest).unwrap().passed);
    }

    #[test]
    fn test_range_limit() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Single);
        let half_sin = registry.lookup("half_sin").unwrap();
        assert!(evaluator.unary(half_sin, 1e5, 0.5).unwrap().passed);
        assert!(!evaluator.unary(half_sin, 1e5, 2.).unwrap().passed);
        assert!(!evaluator.unary(half_sin, 1e3, 0.5).unwrap().passed);
    }

    #[test]
    fn test_mad_and_nan() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Single);
        let mad = registry.lookup("mad").unwrap();
        assert!(evaluator.ternary(mad, 1., 2., 3., 100.).unwrap().passed);
        assert!(!evaluator.ternary(mad, 1., 2., 3., f64::NAN).unwrap().passed);
        let fma = registry.lookup("fma").unwrap();
        assert!(evaluator.ternary(fma, 1., 2., 3., 5.).unwrap().passed);
        assert!(!evaluator.ternary(fma, 1., 2., 3., 6.).unwrap().passed);
        let nan = registry.lookup("nan").unwrap();
        assert!(evaluator.unary_u(nan, 1, f64::NAN).unwrap().passed);
        assert!(!evaluator.unary_u(nan, 1, 1.).unwrap().passed);
    }

    #[test]
    fn test_shape_mismatch() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Single);
        let pow = registry.lookup("pow").unwrap();
        assert_eq!(
            evaluator.unary(pow, 1., 1.),
            Err(OracleError::ArityMismatch {
                name: "pow".to_string(),
                expected: 2,
                found: 1,
            })
        );
        let sqrt = registry.lookup("sqrt").unwrap();
        assert!(matches!(
            evaluator.binary(sqrt, 1., 1., 1.),
            Err(OracleError::ArityMismatch { expected: 1, found: 2, .. })
        ));
        let ilogb = registry.lookup("ilogb").unwrap();
        assert!(matches!(
            evaluator.unary(ilogb, 1., 0.),
            Err(OracleError::ShapeMismatch { .. })
        ));
        assert!(evaluator.binary(pow, 2., 3., 8.).unwrap().passed);
    }

    #[test]
    fn test_half_precision() {
        let (registry, evaluator) = setup(OracleConfig::default(), Precision::Half);
        let sqrt = registry.lookup("sqrt").unwrap();
        let candidate = f16_to_f32(f64_to_f16_bits(2f64.sqrt(), false)) as f64;
        assert!(evaluator.unary(sqrt, 2., candidate).unwrap().passed);
        assert!(!evaluator.unary(sqrt, 2., candidate + 2f64.powi(-8)).unwrap().passed);
        let nextafter = registry.lookup("nextafter").unwrap();
        // 1 - 2^-11
        let below_one = f64::from_bits(0x3feffe0000000000);
        assert!(evaluator.binary(nextafter, 1., 0., below_one).unwrap().passed);
    }

    #[test]
    fn test_error_tracker() {
        let mut first = ErrorTracker::new();
        first.record(Verdict::pass(0.5), &[1.]);
        first.record(
            Verdict {
                error: -3.,
                passed: false,
                skipped: false,
            },
            &[2., 3.],
        );
        first.record(Verdict::skipped(), &[4.]);
        assert_eq!(first.max_error, -3.);
        assert_eq!(first.max_error_inputs, vec![2., 3.]);
        assert_eq!((first.checked, first.failures, first.skipped), (2, 1, 1));
        let mut second = ErrorTracker::new();
        second.record(Verdict::pass(4.), &[5.]);
        second.merge(&first);
        assert_eq!(second.max_error, 4.);
        assert_eq!(second.max_error_inputs, vec![5.]);
        assert_eq!(second.checked, 3);
        assert!(!second.passed());
    }
}
