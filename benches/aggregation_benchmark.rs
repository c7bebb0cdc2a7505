use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fmeadash::core::{FailureMode, RiskRating};
use fmeadash::risk::{
    build_matrix, failure_mode_rows, rpn_findings, summarize, top_risks, RiskClassifier,
};
use fmeadash::testkit::failure_mode;
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["Mechanical", "Electrical", "Hydraulic", "Instrumentation"];

fn generate_modes(count: usize) -> Vec<FailureMode> {
    (0..count)
        .map(|i| {
            let severity = (i % 5) as i64 + 1;
            let probability = (i / 5 % 5) as i64 + 1;
            let mode = failure_mode(
                format!("FM-{i:05}"),
                CATEGORIES[i % CATEGORIES.len()],
                severity,
                probability,
            )
            .with_detection((i % 3) as i64 + 1);
            match i % 5 {
                0 => mode,
                n => mode.with_rating(RiskRating::ALL[n - 1]),
            }
        })
        .collect()
}

fn benchmark_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for size in [100, 1_000, 10_000] {
        let modes = generate_modes(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &modes, |b, modes| {
            b.iter(|| summarize(black_box(modes)))
        });
    }
    group.finish();
}

fn benchmark_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_matrix");
    for size in [100, 1_000, 10_000] {
        let modes = generate_modes(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &modes, |b, modes| {
            b.iter(|| build_matrix(black_box(modes)))
        });
    }
    group.finish();
}

fn benchmark_top_risks(c: &mut Criterion) {
    let modes = generate_modes(10_000);
    let classifier = RiskClassifier::default();

    c.bench_function("top_risks_10k", |b| {
        b.iter(|| {
            let rows = failure_mode_rows(black_box(&modes), &classifier);
            top_risks(&rows, 10)
        })
    });

    c.bench_function("rpn_findings_10k", |b| b.iter(|| rpn_findings(black_box(&modes))));
}

criterion_group!(
    benches,
    benchmark_summarize,
    benchmark_matrix,
    benchmark_top_risks
);
criterion_main!(benches);
