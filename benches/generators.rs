use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fib_series::naive::NaiveSeries;
use fib_series::tuned::TunedSeries;
use fib_series::SeriesGenerator;

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");
    for n in [10i64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, &n| {
            b.iter(|| NaiveSeries.series(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("tuned", n), &n, |b, &n| {
            b.iter(|| TunedSeries.series(black_box(n)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generators);
criterion_main!(benches);
