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
use criterion::{Criterion, criterion_group, criterion_main};
use mathoracle::{
    DoubleDouble, exp2_extended, log2_extended, pow_extended, reduce_mod_half_pi,
};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("log2_extended", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(log2_extended(i as f64 * 0.731));
            }
        })
    });

    c.bench_function("exp2_extended", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(exp2_extended(DoubleDouble::new(
                    1e-20,
                    i as f64 / 1000.0 - 0.5,
                )));
            }
        })
    });

    c.bench_function("pow_extended", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pow_extended(i as f64 * 0.1, 1.37));
            }
        })
    });

    c.bench_function("libm::pow", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::pow(i as f64 * 0.1, 1.37));
            }
        })
    });

    c.bench_function("reduce_mod_half_pi: small", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(reduce_mod_half_pi(i as f64 * 0.37));
            }
        })
    });

    c.bench_function("reduce_mod_half_pi: huge", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(reduce_mod_half_pi(i as f64 * 1e300));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
