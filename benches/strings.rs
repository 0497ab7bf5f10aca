extern crate luascope;

mod common;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use common::{build_table, TABLE_LEN};
use luascope::{ChunkConfig, LString, Parser, StringCodec, StringReader};
use std::hint::black_box;
use strum::IntoEnumIterator;

/// Benchmark sequential decoding of a string table for every codec
fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings_sequential");

    for codec in StringCodec::iter() {
        let config = ChunkConfig::new(codec.tag(), 8).unwrap();
        let (data, offsets) = build_table(codec, &config, TABLE_LEN);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(codec.to_string(), |b| {
            let mut reader = StringReader::new(config).unwrap();
            b.iter(|| {
                let mut parser = Parser::new(black_box(&data));
                let values = reader.read_n(&mut parser, offsets.len()).unwrap();
                black_box(values)
            });
        });
    }
    group.finish();
}

/// Benchmark parallel decoding of a string table at known offsets
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings_parallel");

    for codec in StringCodec::iter() {
        let config = ChunkConfig::new(codec.tag(), 8).unwrap();
        let (data, offsets) = build_table(codec, &config, TABLE_LEN);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(codec.to_string(), |b| {
            b.iter(|| {
                let values = codec
                    .parse_at(black_box(&data), black_box(&offsets), &config)
                    .unwrap();
                black_box(values)
            });
        });
    }
    group.finish();
}

/// Benchmark encoding a string table into a reused buffer
fn bench_encode(c: &mut Criterion) {
    let values: Vec<LString> = (0..4096)
        .map(|i| LString::from(format!("field_name_{i}")))
        .collect();

    let mut group = c.benchmark_group("strings_encode");
    for codec in StringCodec::iter() {
        let config = ChunkConfig::new(codec.tag(), 8).unwrap();
        let total: usize = values.iter().map(|v| codec.encoded_len(&config, v)).sum();

        group.throughput(Throughput::Bytes(total as u64));
        group.bench_function(codec.to_string(), |b| {
            let mut out = Vec::with_capacity(total);
            b.iter(|| {
                out.clear();
                for value in &values {
                    codec.write(&mut out, &config, black_box(value)).unwrap();
                }
                black_box(out.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel, bench_encode);
criterion_main!(benches);
