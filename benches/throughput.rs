//! Benchmarks for task submission and drain throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crossbeam_channel::bounded;
use stoker::prelude::*;

fn drain_tasks(threads: usize, tasks: usize) {
    let config = Config::builder().num_threads(threads).build().unwrap();
    let mut pool = WorkerPool::new(&config).unwrap();

    let (tx, rx) = bounded(tasks);

    for i in 0..tasks {
        let tx = tx.clone();
        pool.execute(move || {
            tx.send(black_box(i)).unwrap();
        })
        .unwrap();
    }

    for _ in 0..tasks {
        rx.recv().unwrap();
    }
    pool.shutdown(false);
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");

    for threads in [1usize, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |b, &threads| {
                b.iter(|| drain_tasks(threads, 1000));
            },
        );
    }

    group.finish();
}

fn bench_pool_lifecycle(c: &mut Criterion) {
    c.bench_function("init_shutdown_4_workers", |b| {
        b.iter(|| {
            let config = Config::builder().num_threads(4).build().unwrap();
            let mut pool = WorkerPool::new(&config).unwrap();
            pool.shutdown(false);
        });
    });
}

criterion_group!(benches, bench_throughput, bench_pool_lifecycle);
criterion_main!(benches);
