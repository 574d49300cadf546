use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use poibin::distributions::PoissonBinomial;
use std::hint::black_box;

fn spread_probabilities(n: usize) -> Vec<f64> {
    (0..n).map(|j| (j as f64 + 0.5) / n as f64).collect()
}

fn bench_construction_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("poisson_binomial_construction");

    for n in [16_usize, 128, 1024, 4000] {
        let probabilities = spread_probabilities(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let pb = PoissonBinomial::new(black_box(&probabilities)).expect("valid input");
                black_box(pb.pmf_values()[n / 2])
            })
        });
    }

    group.finish();
}

fn bench_batch_queries(c: &mut Criterion) {
    let n = 1024;
    let pb = PoissonBinomial::new(&spread_probabilities(n)).expect("valid input");
    let ks: Vec<usize> = (0..=n).collect();

    c.bench_function("pval_many_full_support", |b| {
        b.iter(|| {
            let out = pb.pval_many(black_box(&ks)).expect("valid queries");
            black_box(out[n / 2])
        })
    });
}

criterion_group!(
    poisson_binomial_benches,
    bench_construction_scaling,
    bench_batch_queries
);
criterion_main!(poisson_binomial_benches);
