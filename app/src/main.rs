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
use log::info;
use mathoracle::{
    ErrorTracker, Evaluator, FunctionRegistry, OracleConfig, OracleError, Precision,
    RoundingPolicy,
};
use rand::Rng;

// One sample per 2^16 single precision bit patterns
const WIMPY_STRIDE: u32 = 1 << 16;
const BINARY_SAMPLES: usize = 1 << 16;

fn sweep_unary(
    registry: &FunctionRegistry,
    evaluator: &Evaluator,
    name: &str,
    candidate: fn(f32) -> f32,
) -> Result<ErrorTracker, OracleError> {
    let descriptor = registry.lookup(name)?;
    let mut tracker = ErrorTracker::new();
    let mut rng = rand::rng();
    for base in (0..=u32::MAX).step_by(WIMPY_STRIDE as usize) {
        let x = f32::from_bits(base | rng.random_range(0..WIMPY_STRIDE));
        let verdict = evaluator.unary(descriptor, x as f64, candidate(x) as f64)?;
        tracker.record(verdict, &[x as f64]);
    }
    Ok(tracker)
}

fn sweep_binary(
    registry: &FunctionRegistry,
    evaluator: &Evaluator,
    name: &str,
    candidate: fn(f32, f32) -> f32,
) -> Result<ErrorTracker, OracleError> {
    let descriptor = registry.lookup(name)?;
    let mut tracker = ErrorTracker::new();
    let mut rng = rand::rng();
    for _ in 0..BINARY_SAMPLES {
        let x = f32::from_bits(rng.random::<u32>());
        let y = f32::from_bits(rng.random::<u32>());
        let verdict = evaluator.binary(descriptor, x as f64, y as f64, candidate(x, y) as f64)?;
        tracker.record(verdict, &[x as f64, y as f64]);
    }
    Ok(tracker)
}

fn sweep_double(
    registry: &FunctionRegistry,
    evaluator: &Evaluator,
    name: &str,
    candidate: fn(f64) -> f64,
) -> Result<ErrorTracker, OracleError> {
    let descriptor = registry.lookup(name)?;
    let mut tracker = ErrorTracker::new();
    let mut rng = rand::rng();
    for _ in 0..BINARY_SAMPLES {
        let x = rng.random_range(-700f64..700f64);
        let verdict = evaluator.unary(descriptor, x, candidate(x))?;
        tracker.record(verdict, &[x]);
    }
    Ok(tracker)
}

fn summarize(name: &str, precision: Precision, tracker: &ErrorTracker) {
    info!(
        "{} ({:?}): max error {} at {:?}, {} failures in {} checked, {} skipped",
        name,
        precision,
        tracker.max_error,
        tracker.max_error_inputs,
        tracker.failures,
        tracker.checked,
        tracker.skipped
    );
}

fn main() -> Result<(), OracleError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let registry = FunctionRegistry::new()?;
    let config = OracleConfig {
        rounding: RoundingPolicy::probe(),
        ..Default::default()
    };
    let single = Evaluator::new(config, Precision::Single);

    let unary: [(&str, fn(f32) -> f32); 6] = [
        ("exp", libm::expf),
        ("exp2", libm::exp2f),
        ("log", libm::logf),
        ("log2", libm::log2f),
        ("sin", libm::sinf),
        ("cbrt", libm::cbrtf),
    ];
    for (name, candidate) in unary {
        let tracker = sweep_unary(&registry, &single, name, candidate)?;
        summarize(name, Precision::Single, &tracker);
    }

    let binary: [(&str, fn(f32, f32) -> f32); 3] = [
        ("pow", libm::powf),
        ("hypot", libm::hypotf),
        ("atan2", libm::atan2f),
    ];
    for (name, candidate) in binary {
        let tracker = sweep_binary(&registry, &single, name, candidate)?;
        summarize(name, Precision::Single, &tracker);
    }

    // the fast relaxed path judged against the relaxed rules
    let relaxed = Evaluator::new(
        OracleConfig {
            relaxed: true,
            ..config
        },
        Precision::Single,
    );
    let relaxed_sin = |x: f32| (x as f64).sin() as f32;
    let tracker = sweep_unary(&registry, &relaxed, "sin", relaxed_sin)?;
    summarize("relaxed sin", Precision::Single, &tracker);

    let double = Evaluator::new(config, Precision::Double);
    let tracker = sweep_double(&registry, &double, "exp", libm::exp)?;
    summarize("exp", Precision::Double, &tracker);
    let tracker = sweep_double(&registry, &double, "sin", libm::sin)?;
    summarize("sin", Precision::Double, &tracker);

    Ok(())
}
