use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fanmap::prelude::*;
use rayon::prelude::*;
use tokio::runtime::{Builder, Runtime};

fn columns(len: usize) -> [Vec<i64>; 2] {
    let a: Vec<i64> = (0..len as i64).collect();
    let b: Vec<i64> = a.iter().rev().copied().collect();
    [a, b]
}

/// Sequential map over two columns of growing length
fn bench_sequential_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_map");

    for len in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || columns(len),
                |set| {
                    let mapped = map(|t: Vec<i64>| Ok::<_, ()>(t[0] * t[1]), set).unwrap();
                    black_box(mapped.values);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// One task per element, unbounded vs capped
fn bench_map_conc(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_conc");
    let runtime = Runtime::new().unwrap();

    for len in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("unbounded", len), &len, |b, &len| {
            b.to_async(&runtime).iter_batched(
                || columns(len),
                |set| async move {
                    let mapped = map_conc(
                        |t: Vec<i64>, _| async move { Ok::<_, ()>(t[0] * t[1]) },
                        set,
                    )
                    .await
                    .unwrap();
                    black_box(mapped.values);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("max_8", len), &len, |b, &len| {
            b.to_async(&runtime).iter_batched(
                || columns(len),
                |set| async move {
                    let mapped = FanOut::new()
                        .with_max_concurrency(8)
                        .map(|t: Vec<i64>, _| async move { Ok::<_, ()>(t[0] * t[1]) }, set)
                        .await
                        .unwrap();
                    black_box(mapped.values);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Fan-out with a simulated blocking collaborator, across runtime sizes
fn bench_map_conc_with_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_conc_latency");
    group.sample_size(10);

    for num_threads in [1, 4, 8] {
        let runtime = Builder::new_multi_thread()
            .worker_threads(num_threads)
            .enable_all()
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}threads_100units", num_threads)),
            &num_threads,
            |b, _| {
                b.to_async(&runtime).iter_batched(
                    || columns(100),
                    |set| async move {
                        let mapped = map_conc(
                            |t: Vec<i64>, _| async move {
                                tokio::time::sleep(std::time::Duration::from_millis(1)).await;
                                Ok::<_, ()>(t[0] + t[1])
                            },
                            set,
                        )
                        .await
                        .unwrap();
                        black_box(mapped.values);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Work-stealing baseline for the same element-wise product
fn bench_rayon_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("rayon_baseline");

    for len in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || columns(len),
                |[xs, ys]| {
                    let product: Vec<i64> =
                        xs.par_iter().zip(ys.par_iter()).map(|(x, y)| x * y).collect();
                    black_box(product);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_map,
    bench_map_conc,
    bench_map_conc_with_latency,
    bench_rayon_baseline
);
criterion_main!(benches);
