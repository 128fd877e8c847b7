// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;
use wideint::{U128, U256, uint128};

const SAMPLES: usize = 256;

fn random_u128(prng: &mut ChaCha20Rng) -> U128 {
    U128 {
        lo: prng.next_u64(),
        hi: prng.next_u64(),
    }
}

fn random_u256(prng: &mut ChaCha20Rng) -> U256 {
    U256 {
        lo: random_u128(prng),
        hi: random_u128(prng),
    }
}

fn bench_uint128(c: &mut Criterion) {
    let mut prng = ChaCha20Rng::seed_from_u64(42);
    let xs: Vec<U128> = (0..SAMPLES).map(|_| random_u128(&mut prng)).collect();
    // Divisors with an empty upper half exercise the narrow division path.
    let narrow: Vec<U128> = (0..SAMPLES)
        .map(|_| U128::from(prng.next_u64() | 1))
        .collect();

    let mut group = c.benchmark_group("uint128");
    group.bench_function("wrapping_mul", |b| {
        b.iter(|| {
            xs.iter()
                .zip(xs.iter().rev())
                .fold(U128::ZERO, |acc, (&x, &y)| acc ^ (x * y))
        })
    });
    group.bench_function("full_mul", |b| {
        b.iter(|| {
            for (&x, &y) in xs.iter().zip(xs.iter().rev()) {
                black_box(uint128::mul(x, y));
            }
        })
    });
    for (name, divisors) in [("wide_divisor", &xs), ("narrow_divisor", &narrow)] {
        group.bench_with_input(BenchmarkId::new("quo_rem", name), divisors, |b, divisors| {
            b.iter(|| {
                for (&x, &y) in xs.iter().zip(divisors.iter()) {
                    let _ = black_box(x.quo_rem(y));
                }
            })
        });
    }
    group.bench_function("to_string", |b| {
        b.iter(|| {
            for x in &xs {
                black_box(x.to_string());
            }
        })
    });
    group.finish();
}

fn bench_uint256(c: &mut Criterion) {
    let mut prng = ChaCha20Rng::seed_from_u64(42);
    let xs: Vec<U256> = (0..SAMPLES).map(|_| random_u256(&mut prng)).collect();
    let ys: Vec<U256> = (0..SAMPLES)
        .map(|_| random_u256(&mut prng) >> (prng.next_u32() % 200))
        .collect();

    let mut group = c.benchmark_group("uint256");
    group.bench_function("wrapping_add", |b| {
        b.iter(|| xs.iter().fold(U256::ZERO, |acc, &x| acc + x))
    });
    group.bench_function("wrapping_mul", |b| {
        b.iter(|| {
            xs.iter()
                .zip(ys.iter())
                .fold(U256::ZERO, |acc, (&x, &y)| acc ^ (x * y))
        })
    });
    group.bench_function("quo_rem", |b| {
        b.iter(|| {
            for (&x, &y) in xs.iter().zip(ys.iter()) {
                let _ = black_box(x.quo_rem(y));
            }
        })
    });
    group.bench_function("rotate_left", |b| {
        b.iter(|| {
            for (i, &x) in xs.iter().enumerate() {
                black_box(x.rotate_left(i as i32));
            }
        })
    });
    group.bench_function("parse", |b| {
        let text: Vec<String> = xs.iter().map(|x| x.to_string()).collect();
        b.iter(|| {
            for s in &text {
                let _ = black_box(s.parse::<U256>());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_uint128, bench_uint256);
criterion_main!(benches);
