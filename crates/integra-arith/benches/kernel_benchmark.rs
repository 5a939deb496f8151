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


use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use integra_arith::factorial::{factorial, split_factorial};
use integra_arith::number_theory::prime_factors;
use integra_bits::{count, portable};
use num_bigint::BigInt;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");
    for n in [100u32, 500, 1000, 3000] {
        let v = BigInt::from(n);
        group.bench_with_input(BenchmarkId::new("iterative", n), &v, |b, v| {
            b.iter(|| factorial(black_box(v)).expect("BigInt factorial cannot overflow"))
        });
        group.bench_with_input(BenchmarkId::new("split", n), &v, |b, v| {
            b.iter(|| split_factorial(black_box(v)).expect("BigInt factorial cannot overflow"))
        });
    }
    group.finish();
}

fn bench_population_count(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let words: Vec<u64> = (0..1024).map(|_| rng.random()).collect();
    let big: Vec<BigInt> = (0..64)
        .map(|_| {
            let bytes: Vec<u8> = (0..256).map(|_| rng.random()).collect();
            BigInt::from_signed_bytes_le(&bytes)
        })
        .collect();

    let mut group = c.benchmark_group("population_count");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function(BenchmarkId::new("active", "u64"), |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| count::population_count(black_box(w)))
                .sum::<usize>()
        })
    });
    group.bench_function(BenchmarkId::new("portable", "u64"), |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| portable::population_count(black_box(w)))
                .sum::<usize>()
        })
    });

    group.throughput(Throughput::Elements(big.len() as u64));
    group.bench_function(BenchmarkId::new("active", "BigInt"), |b| {
        b.iter(|| {
            big.iter()
                .map(|w| count::population_count(black_box(w)))
                .sum::<usize>()
        })
    });
    group.bench_function(BenchmarkId::new("portable", "BigInt"), |b| {
        b.iter(|| {
            big.iter()
                .map(|w| portable::population_count(black_box(w)))
                .sum::<usize>()
        })
    });
    group.finish();
}

fn bench_prime_factors(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let values: Vec<u64> = (0..256).map(|_| rng.random_range(1..1_000_000_000)).collect();

    let mut group = c.benchmark_group("prime_factors");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("wheel_u64", |b| {
        b.iter(|| {
            values
                .iter()
                .map(|v| prime_factors(black_box(v)).map_or(0, |f| f.len()))
                .sum::<usize>()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_factorial,
    bench_population_count,
    bench_prime_factors
);
criterion_main!(benches);
