//! JSON and CBOR codec benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prefkv_bench::Settings;
use prefkv_codec::{CborCodec, Decoder, Encoder, JsonCodec};

/// Benchmark encoding with each codec.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for recent in [0, 16, 256] {
        let settings = Settings::sample(recent);

        group.bench_with_input(BenchmarkId::new("json", recent), &settings, |b, s| {
            let codec = JsonCodec::new();
            b.iter(|| {
                let result = codec.encode(black_box(s)).unwrap();
                black_box(result);
            });
        });

        group.bench_with_input(BenchmarkId::new("json_pretty", recent), &settings, |b, s| {
            let codec = JsonCodec::pretty();
            b.iter(|| {
                let result = codec.encode(black_box(s)).unwrap();
                black_box(result);
            });
        });

        group.bench_with_input(BenchmarkId::new("cbor", recent), &settings, |b, s| {
            b.iter(|| {
                let result = CborCodec.encode(black_box(s)).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

/// Benchmark decoding with each codec.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let settings = Settings::sample(64);

    let json = JsonCodec::new().encode(&settings).unwrap();
    group.throughput(Throughput::Bytes(json.len() as u64));
    group.bench_function("json", |b| {
        let codec = JsonCodec::new();
        b.iter(|| {
            let result: Settings = codec.decode(black_box(&json)).unwrap();
            black_box(result);
        });
    });

    let cbor = CborCodec.encode(&settings).unwrap();
    group.throughput(Throughput::Bytes(cbor.len() as u64));
    group.bench_function("cbor", |b| {
        b.iter(|| {
            let result: Settings = CborCodec.decode(black_box(&cbor)).unwrap();
            black_box(result);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);

criterion_main!(benches);
