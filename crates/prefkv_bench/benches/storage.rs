//! Store benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prefkv_bench::{filler_data, generate_entries};
use prefkv_storage::{FileStore, InMemoryStore, KeyValueStore, StoreValue};
use tempfile::TempDir;

/// Benchmark InMemoryStore writes.
fn bench_inmemory_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("inmemory_set");

    for size in [64, 1024, 4096] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let store = InMemoryStore::new();
            let data = filler_data(size);

            b.iter(|| store.set("blob", StoreValue::Bytes(black_box(data.clone()))));
        });
    }

    group.finish();
}

/// Benchmark FileStore flushes as the snapshot grows.
fn bench_file_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_flush");

    // File flushes are slow
    group.sample_size(20);

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let temp_dir = TempDir::new().unwrap();
            let store = FileStore::open(&temp_dir.path().join("bench.prefkv")).unwrap();
            for (key, value) in generate_entries(count, 64) {
                store.set(&key, value);
            }

            let mut n = 0i64;
            b.iter(|| {
                n += 1;
                store.set("counter", StoreValue::Integer(n));
                store.flush().unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark opening a FileStore from an existing snapshot.
fn bench_file_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_open");
    group.sample_size(20);

    for count in [100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("bench.prefkv");
            let store = FileStore::open(&path).unwrap();
            for (key, value) in generate_entries(count, 64) {
                store.set(&key, value);
            }
            store.flush().unwrap();

            b.iter(|| {
                let reopened = FileStore::open(black_box(&path)).unwrap();
                black_box(reopened);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_inmemory_set, bench_file_flush, bench_file_open);

criterion_main!(benches);
