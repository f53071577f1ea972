use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use openroyalty::allocation::compute_allocations;
use openroyalty::core::{LeaseParameters, OwnerInput};
use openroyalty::report::to_owner_csv;
use std::hint::black_box;

fn benchmark_lease() -> LeaseParameters {
    LeaseParameters::builder()
        .gross_revenue(2_500_000.0)
        .total_acres(640.0)
        .estimated_costs(900_000.0)
        .royalty_rate(0.1875)
        .build()
        .expect("benchmark lease should be valid")
}

fn owners(n: usize) -> Vec<OwnerInput> {
    (0..n)
        .map(|i| OwnerInput::new(format!("Owner {}", i + 1), 640.0 / n as f64))
        .collect()
}

fn bench_compute_allocations(c: &mut Criterion) {
    let lease = benchmark_lease();
    let mut group = c.benchmark_group("compute_allocations");

    for n in [2_usize, 10, 1_000, 100_000] {
        let input = owners(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| black_box(compute_allocations(black_box(&lease), black_box(input))))
        });
    }
    group.finish();
}

fn bench_csv_export(c: &mut Criterion) {
    let report = compute_allocations(&benchmark_lease(), &owners(1_000));

    c.bench_function("owner_csv_1000", |b| {
        b.iter(|| black_box(to_owner_csv(black_box(&report.allocations))))
    });
}

criterion_group!(benches, bench_compute_allocations, bench_csv_export);
criterion_main!(benches);
