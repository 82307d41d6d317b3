#![no_main]

use libfuzzer_sys::fuzz_target;
use mathoracle::{
    DoubleDouble, Evaluator, FunctionRegistry, OracleConfig, Precision, exp2_extended,
    log2_extended, pow_extended, reduce_mod_half_pi,
};

fuzz_target!(|data: (u64, u64)| {
    let x = f64::from_bits(data.0);
    let y = f64::from_bits(data.1);
    let x_f32 = f32::from_bits(data.0 as u32) as f64;
    let y_f32 = f32::from_bits(data.1 as u32) as f64;

    let reduced = reduce_mod_half_pi(x);
    if x.is_finite() {
        assert!(!reduced.reduced.is_nan(), "Reduction of {} gave NaN", x);
    }
    _ = log2_extended(x);
    _ = exp2_extended(DoubleDouble::new(y, x));
    _ = pow_extended(x, y);

    let Ok(registry) = FunctionRegistry::new() else {
        return;
    };
    let evaluator = Evaluator::new(OracleConfig::default(), Precision::Single);
    for name in ["exp", "log", "sin", "sqrt"] {
        if let Ok(descriptor) = registry.lookup(name) {
            _ = evaluator.unary(descriptor, x_f32, y_f32);
        }
    }
    for name in ["pow", "hypot", "divide", "nextafter"] {
        if let Ok(descriptor) = registry.lookup(name) {
            _ = evaluator.binary(descriptor, x_f32, y_f32, x_f32);
        }
    }
    if let Ok(descriptor) = registry.lookup("remquo") {
        _ = evaluator.binary_two_results_int(descriptor, x_f32, y_f32, (y_f32, 0));
    }
});
