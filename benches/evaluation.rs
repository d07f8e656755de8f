use arithmex_rs::ArithmeticCalculatorBuilder;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::*;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let calculator = ArithmeticCalculatorBuilder::new().build();
    let cached = ArithmeticCalculatorBuilder::new().cache_capacity(16).build();

    let expr = "2 + 3 * 4";
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("arithmex_arithmetic", |b| {
        b.iter(|| calculator.calculate(black_box(expr)).unwrap())
    });

    group.bench_function("cached_arithmex_arithmetic", |b| {
        b.iter(|| cached.calculate(black_box(expr)).unwrap())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let calculator = ArithmeticCalculatorBuilder::new().build();
    let cached = ArithmeticCalculatorBuilder::new().cache_capacity(16).build();

    let expr = "-(2 * (7 - 3)) + (10 + 20) * 3 / (4 - 1) + 5";

    group.bench_function("arithmex_complex_arithmetic", |b| {
        b.iter(|| calculator.calculate(black_box(expr)).unwrap())
    });

    group.bench_function("cached_arithmex_complex_arithmetic", |b| {
        b.iter(|| cached.calculate(black_box(expr)).unwrap())
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box(-(2.0 * (7.0 - 3.0)) + (10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark function calls
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Call Evaluation");

    let calculator = ArithmeticCalculatorBuilder::new()
        .with_default_functions()
        .register_function("square", |args| match args {
            [x] => Ok(x * x),
            _ => Err("Invalid arguments".into()),
        })
        .build();

    group.bench_function("arithmex_function_call", |b| {
        b.iter(|| calculator.calculate(black_box("square(4)")).unwrap())
    });

    group.bench_function("arithmex_nested_function_call", |b| {
        b.iter(|| {
            calculator
                .calculate(black_box("max(min(3, 9), pow(2, 3), sum(1, 2, 3))"))
                .unwrap()
        })
    });

    group.bench_function("native_rust_function_call", |b| {
        b.iter(|| black_box(4.0 * 4.0))
    });
}

/// Benchmark batch evaluation
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let calculator = ArithmeticCalculatorBuilder::new()
        .with_default_functions()
        .build();
    let expressions: Vec<String> = (0..1_000)
        .map(|i| format!("max({}, {}) * ({} - 3) / 7", i, i / 2, i))
        .collect();

    group.bench_function("parallel_batch", |b| {
        b.iter(|| calculator.calculate_batch(black_box(&expressions)))
    });

    group.bench_function("sequential_batch", |b| {
        b.iter(|| {
            expressions
                .iter()
                .map(|expression| calculator.calculate(black_box(expression)))
                .collect::<Vec<_>>()
        })
    });
}

/// Grouping benchmarks
criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_function_calls,
    benchmark_batch,
);
criterion_main!(benches);
