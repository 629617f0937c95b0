//! Benchmark suite for the minimization pipeline
//!
//! Covers the three core algorithms: Quine-McCluskey minimization of
//! majority functions of growing width, unate recursive complementation,
//! and tautology checking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mccluskey_logic::{qm, BoolExpr, Cover, Cube, MinimizeConfig};
use std::sync::Arc;

/// The on-set of the n-input majority function
fn majority_on_set(width: usize) -> (Vec<Arc<str>>, Vec<Cube>) {
    let variables: Vec<Arc<str>> = (0..width)
        .map(|i| Arc::from(format!("x{}", i).as_str()))
        .collect();
    let minterms = Cube::dashes(width)
        .minterms()
        .filter(|m| m.ones() * 2 > width)
        .collect();
    (variables, minterms)
}

/// A checkerboard cover: every second minterm of the space
fn checkerboard_cover(width: usize) -> Cover {
    let variables: Vec<String> = (0..width).map(|i| format!("x{}", i)).collect();
    let mut cover = Cover::new(&variables);
    for minterm in Cube::dashes(width).minterms() {
        if minterm.ones() % 2 == 0 {
            cover.push(minterm).unwrap();
        }
    }
    cover
}

fn bench_minimize_on_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize_on_set");
    for width in [4, 6, 8, 10] {
        let (variables, minterms) = majority_on_set(width);
        group.throughput(Throughput::Elements(minterms.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("majority", width),
            &(variables, minterms),
            |b, (variables, minterms)| {
                b.iter(|| {
                    let cover = qm::minimize_on_set(
                        black_box(variables.clone()),
                        black_box(minterms.clone()),
                        &MinimizeConfig::default(),
                    );
                    black_box(cover);
                });
            },
        );
    }
    group.finish();
}

fn bench_minimize_expression(c: &mut Criterion) {
    let inputs = [
        ("absorption", "a * b + a * b * c + a * b * d"),
        ("consensus", "a * b + ~a * c + b * c"),
        ("xor4", "a*~b*~c*~d + ~a*b*~c*~d + ~a*~b*c*~d + ~a*~b*~c*d"),
    ];
    let mut group = c.benchmark_group("minimize_expression");
    for (name, input) in inputs {
        let expr = BoolExpr::parse(input).unwrap();
        group.bench_with_input(BenchmarkId::new("simplify_qm", name), &expr, |b, expr| {
            b.iter(|| black_box(qm::minimize(black_box(expr))));
        });
    }
    group.finish();
}

fn bench_complement(c: &mut Criterion) {
    let mut group = c.benchmark_group("complement");
    for width in [4, 6, 8] {
        let cover = checkerboard_cover(width);
        group.throughput(Throughput::Elements(cover.num_cubes() as u64));
        group.bench_with_input(
            BenchmarkId::new("checkerboard", width),
            &cover,
            |b, cover| {
                b.iter(|| black_box(cover.complement()));
            },
        );
    }
    group.finish();
}

fn bench_tautology(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_tautology");
    for width in [4, 6, 8] {
        // The union of a checkerboard and its complement covers everything.
        let cover = checkerboard_cover(width);
        let tautology = cover.unite(&cover.complement()).unwrap();
        group.throughput(Throughput::Elements(tautology.num_cubes() as u64));
        group.bench_with_input(
            BenchmarkId::new("checkerboard_union", width),
            &tautology,
            |b, cover| {
                b.iter(|| black_box(cover.is_tautology()));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_minimize_on_set,
    bench_minimize_expression,
    bench_complement,
    bench_tautology
);
criterion_main!(benches);
