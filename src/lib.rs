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
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
mod config;
mod err;
mod evaluator;
/// Double-double arithmetic and the extended precision engines behind the references
pub mod math;
mod mlaf;
pub mod reference;
mod registry;
mod ulp;

pub use config::{DenormalMode, OracleConfig, Precision, Profile, RoundingMode, RoundingPolicy};
pub use err::OracleError;
pub use evaluator::{
    ErrorMetric, ErrorTracker, Evaluator, InputsInfo, Recompute, Verdict, evaluate,
    evaluate_extended,
};
pub use math::double_double::DoubleDouble;
pub use math::exp2_ep::exp2_extended;
pub use math::log2_ep::log2_extended;
pub use math::payne_hanek::{ReducedArgument, reduce_mod_half_pi};
pub use math::pow_ep::pow_extended;
pub use registry::{
    FunctionDescriptor, FunctionRegistry, Reference, ReferenceValue, RelaxedRule, Shape,
    Tolerance,
};
pub use ulp::{
    abs_error, is_operand_subnormal, is_result_subnormal, is_result_subnormal_abs, ulp_error,
    ulp_error_f16, ulp_error_f32, ulp_error_f64,
};
