//! Benchmark for the combinator builders.
//!
//! Compares built combinators against the equivalent hand-written calls.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fncombinators::prelude::*;

fn sum_by2(x: i32) -> i32 {
    x.wrapping_add(2)
}

fn mul_by3(x: i32) -> i32 {
    x.wrapping_mul(3)
}

// =============================================================================
// Fixed-arity composition
// =============================================================================

fn benchmark_fixed_composition(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fixed_composition");

    let composed = compose5(sum_by2, mul_by3, sum_by2, mul_by3, sum_by2);
    group.bench_function("compose5", |bencher| {
        bencher.iter(|| composed(black_box(1)));
    });

    group.bench_function("hand_written", |bencher| {
        bencher.iter(|| sum_by2(mul_by3(sum_by2(mul_by3(sum_by2(black_box(1)))))));
    });

    group.finish();
}

// =============================================================================
// Variadic chains
// =============================================================================

fn benchmark_variadic_chains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("variadic_chains");

    for length in [1, 10, 100] {
        let functions: Vec<fn(i32) -> i32> = (0..length)
            .map(|index| if index % 2 == 0 { sum_by2 as fn(i32) -> i32 } else { mul_by3 })
            .collect();

        let piped = pipe_n(functions.clone());
        group.bench_with_input(BenchmarkId::new("pipe_n", length), &length, |bencher, _| {
            bencher.iter(|| piped(black_box(1)));
        });

        let dynamic = pipe_unsafe(
            functions
                .iter()
                .map(|function| {
                    let function = *function;
                    erase(move |x: i32| function(x))
                })
                .collect::<Vec<AnyFunc>>(),
        );
        group.bench_with_input(BenchmarkId::new("pipe_unsafe", length), &length, |bencher, _| {
            bencher.iter(|| dynamic(Dynamic::new(black_box(1))).and_then(Dynamic::downcast::<i32>));
        });
    }

    group.finish();
}

// =============================================================================
// Partial application and currying
// =============================================================================

fn benchmark_partial_and_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_and_curry");

    let add = |a: i64, b: i64, c: i64| a + b + c;

    let partially_applied = partial2(add, 1);
    group.bench_function("partial2", |bencher| {
        bencher.iter(|| partially_applied(black_box(2), black_box(3)));
    });

    let curried = curry3(add);
    group.bench_function("curry3_full_application", |bencher| {
        bencher.iter(|| curried(black_box(1))(black_box(2))(black_box(3)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fixed_composition,
    benchmark_variadic_chains,
    benchmark_partial_and_curry
);
criterion_main!(benches);
