//! Performance benchmarks for the tile library
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tile_library::core::constants::TAG_LENGTH;
use tile_library::core::dna::md5_hex;
use tile_library::core::{
    decode_variant, encode_position, encode_variant, validate_tile_variant, LanternName, TileVariantFields,
};
use tile_library::formats::validate_tile_records;

/// Benchmark packing a single tile variant
fn bench_encode_variant(c: &mut Criterion) {
    c.bench_function("encode_variant", |b| {
        b.iter(|| {
            let packed = encode_variant(
                black_box(1),
                black_box(0x2a),
                black_box(0x100),
                black_box(3),
            );
            black_box(packed)
        })
    });
}

/// Benchmark unpacking a batch of tile variants
fn bench_decode_batch(c: &mut Criterion) {
    let ints: Vec<i64> = (0..1000)
        .map(|i| encode_variant(0, i % 0x35f, i, i % 0x100).unwrap() as i64)
        .collect();

    let mut group = c.benchmark_group("decode_batch");

    for size in [100, 500, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                for int in ints.iter().take(size) {
                    black_box(decode_variant(*int).unwrap());
                }
            })
        });
    }

    group.finish();
}

/// Benchmark lantern name parsing
fn bench_lantern_parse(c: &mut Criterion) {
    let names = ["01f.00.002a", "01f.00.002a.003", "35e.01.ffff.0ff+4"];

    c.bench_function("lantern_parse", |b| {
        b.iter(|| {
            for name in &names {
                let parsed: LanternName = black_box(name).parse().unwrap();
                black_box(parsed);
            }
        })
    });
}

/// Benchmark full tile variant validation
fn bench_validate_tile_variant(c: &mut Criterion) {
    let start_tag = "a".repeat(TAG_LENGTH);
    let end_tag = "g".repeat(TAG_LENGTH);
    let sequence = format!("{}{}{}", start_tag, "acgt".repeat(50), end_tag);
    let md5sum = md5_hex(&sequence);
    let fields = TileVariantFields {
        tile_position_int: encode_position(0, 3, 7).unwrap() as i64,
        tile_variant_int: encode_variant(0, 3, 7, 2).unwrap() as i64,
        variant_value: 2,
        sequence: &sequence,
        length: sequence.len() as i64,
        md5sum: &md5sum,
        start_tag: &start_tag,
        end_tag: &end_tag,
        is_start_of_path: false,
        is_end_of_path: false,
    };

    c.bench_function("validate_tile_variant", |b| {
        b.iter(|| black_box(validate_tile_variant(black_box(&fields))))
    });
}

/// Benchmark record file validation, sequential vs parallel
fn bench_validate_records(c: &mut Criterion) {
    let start_tag = "a".repeat(TAG_LENGTH);
    let end_tag = "g".repeat(TAG_LENGTH);
    let mut input = String::new();
    for step in 1..2001i64 {
        let sequence = format!("{}{}{}", start_tag, "acgt".repeat(50), end_tag);
        input.push_str(&format!(
            "{}\t{}\t0\t{}\t{}\t{}\t{}\tfalse\tfalse\t{}\n",
            encode_position(0, 3, step).unwrap(),
            encode_variant(0, 3, step, 0).unwrap(),
            sequence.len(),
            md5_hex(&sequence),
            start_tag,
            end_tag,
            sequence
        ));
    }

    let mut group = c.benchmark_group("validate_records");
    group.throughput(Throughput::Elements(2000));

    for threads in [1, 4].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(threads), threads, |b, &threads| {
            b.iter(|| {
                let mut report = Vec::new();
                let stats = validate_tile_records(input.as_bytes(), &mut report, threads).unwrap();
                black_box(stats)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_variant,
    bench_decode_batch,
    bench_lantern_parse,
    bench_validate_tile_variant,
    bench_validate_records,
);

criterion_main!(benches);
