//! Benchmark for curried dispatch, composition and the variadic folds.
//!
//! Compares curried calls against direct calls so the cost of the boxed
//! partial levels stays visible.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fpkit::arithmetic::{add, add3};
use fpkit::combinator::{Invoke, curry, curry3};
use fpkit::compose::{Endo, compose, compose2};
use fpkit::sequence::{map, reduce, sort_by_num};
use std::hint::black_box;

// =============================================================================
// Curry Benchmarks
// =============================================================================

fn benchmark_curry_dispatch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_dispatch");

    let combine = |first: i64, second: i64, third: i64| first * 100 + second * 10 + third;

    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| combine(black_box(1), black_box(2), black_box(3)));
    });

    let curried = curry3(combine);

    group.bench_function("curry3_saturated", |bencher| {
        bencher.iter(|| curried.invoke((black_box(1), black_box(2), black_box(3))));
    });

    let partially_applied = curried.invoke((1,)).invoke((2,));

    group.bench_function("curry3_prebuilt_partial", |bencher| {
        bencher.iter(|| partially_applied(black_box(3)));
    });

    group.bench_function("curry3_one_at_a_time", |bencher| {
        bencher.iter(|| curried.invoke((black_box(1),)).invoke((black_box(2),))(black_box(3)));
    });

    group.finish();
}

fn benchmark_variadic_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("variadic_curry");

    for arity in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("one_per_call", arity), &arity, |bencher, &arity| {
            let curried = curry(arity, |values: Vec<u64>| values.iter().sum::<u64>());
            bencher.iter(|| {
                (0..arity as u64)
                    .try_fold(curried.invoke([]), |applied, value| applied.invoke([black_box(value)]))
                    .ok()
                    .and_then(|applied| applied.value())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Composition Benchmarks
// =============================================================================

fn benchmark_composition(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composition");

    let add_one = |value: i64| value + 1;
    let double = |value: i64| value * 2;

    group.bench_function("compose2_static", |bencher| {
        let composed = compose2(add_one, double);
        bencher.iter(|| composed(black_box(21)));
    });

    for length in [2, 8, 32] {
        group.bench_with_input(BenchmarkId::new("compose_list", length), &length, |bencher, &length| {
            let functions: Vec<Endo<i64>> = (0..length)
                .map(|offset| -> Endo<i64> { Box::new(move |value| value + offset) })
                .collect();
            let Ok(composed) = compose(functions) else {
                return;
            };
            bencher.iter(|| composed(black_box(0)));
        });
    }

    group.finish();
}

// =============================================================================
// Sequence and Arithmetic Benchmarks
// =============================================================================

fn benchmark_folds(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("folds");

    for size in [10, 1_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("reduce", size), &values, |bencher, values| {
            let total = reduce().invoke((|left: i64, right: i64| left + right,));
            bencher.iter(|| total(black_box(values.clone())));
        });

        group.bench_with_input(BenchmarkId::new("add_variadic", size), &values, |bencher, values| {
            bencher.iter(|| add(black_box(values.clone())));
        });

        group.bench_with_input(BenchmarkId::new("map", size), &values, |bencher, values| {
            let squared = map().invoke((|value: i64| value * value,));
            bencher.iter(|| squared(black_box(values.clone())));
        });

        group.bench_with_input(BenchmarkId::new("sort_by_num", size), &values, |bencher, values| {
            let reversed: Vec<i64> = values.iter().rev().copied().collect();
            bencher.iter(|| sort_by_num(black_box(reversed.clone())));
        });
    }

    group.bench_function("add3_curried", |bencher| {
        let add_two = add3().invoke((1, 1));
        bencher.iter(|| add_two(black_box(40)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_curry_dispatch,
    benchmark_variadic_curry,
    benchmark_composition,
    benchmark_folds
);

criterion_main!(benches);
