//! Benchmark – skipping, validating, and materializing a synthetic corpus.
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jsonscan::{skip_value, skip_value_fast, valid, Buffer, ValueReader};

/// Produce a deterministic JSON document of at least `target_len` bytes:
/// an array of user-like records, so every scanner component (strings with
/// escapes, numbers, literals, nesting) sees realistic traffic.
fn make_json_payload(target_len: usize) -> Vec<u8> {
    let mut doc = Vec::with_capacity(target_len + 128);
    doc.push(b'[');
    let mut i = 0usize;
    while doc.len() < target_len {
        if i > 0 {
            doc.push(b',');
        }
        let record = format!(
            r#"{{"id":{i},"name":"user-{i}\n","score":{}.25,"tags":["alpha","beta"],"active":{},"plan":null}}"#,
            i * 7,
            i % 3 == 0
        );
        doc.extend_from_slice(record.as_bytes());
        i += 1;
    }
    doc.push(b']');
    doc
}

fn bench_skip(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip_value");
    for &size in &[4_096usize, 65_536, 1 << 20] {
        let payload = make_json_payload(size);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        let mut buf = Buffer::new();
        group.bench_with_input(BenchmarkId::new("strict", size), &payload, |b, payload| {
            b.iter(|| {
                let p = skip_value(black_box(payload), Some(&mut buf)).unwrap();
                black_box(p);
            });
        });
        group.bench_with_input(BenchmarkId::new("fast", size), &payload, |b, payload| {
            b.iter(|| {
                let p = skip_value_fast(black_box(payload), Some(&mut buf)).unwrap();
                black_box(p);
            });
        });
        group.bench_with_input(BenchmarkId::new("valid", size), &payload, |b, payload| {
            b.iter(|| {
                black_box(valid(black_box(payload), Some(&mut buf)));
            });
        });
    }
    group.finish();
}

fn bench_read_value(c: &mut Criterion) {
    let payload = make_json_payload(65_536);
    let mut group = c.benchmark_group("read_value");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("reused_reader", |b| {
        let mut reader = ValueReader::new();
        b.iter(|| {
            let (val, _) = reader.read_value(black_box(&payload)).unwrap();
            black_box(val);
        });
    });
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_skip, bench_read_value }
criterion_main!(benches);
