//! Generator benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench generators
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use synth_bench::expr::Expr;
use synth_bench::ops::{BoolOp, Op};
use synth_bench::random::{random_dnf, random_formula, DEFAULT_SEED};

fn bool_vars(n: usize) -> Vec<Expr> {
    (0..n).map(|i| Expr::bool_var(format!("x{}", i))).collect()
}

fn standard_ops() -> Vec<Op> {
    vec![
        Op::binary(BoolOp::And),
        Op::binary(BoolOp::Or),
        Op::binary(BoolOp::Xor),
        Op::unary(BoolOp::Not),
    ]
}

fn bench_random_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_formula");
    let inputs = bool_vars(4);
    let ops = standard_ops();

    for size in [10, 40, 160, 640] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| random_formula(&inputs, size, &ops, DEFAULT_SEED).unwrap());
        });
    }

    group.finish();
}

fn bench_random_dnf(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_dnf");

    // Exponential in the variable count, so keep n modest.
    for n in [4, 8, 12] {
        let inputs = bool_vars(n);
        group.throughput(Throughput::Elements(1u64 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &inputs, |b, inputs| {
            b.iter(|| random_dnf(inputs, 50, DEFAULT_SEED));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_formula, bench_random_dnf);
criterion_main!(benches);
