//! Benchmarks for schema inference operations
//!
//! Run with: cargo bench -p entity-scaffold-core

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use entity_scaffold_core::SchemaParser;
use entity_scaffold_core::inference::{detect_format, infer_type};
use entity_scaffold_core::naming::{pluralize, to_kebab_case, to_pascal_case};
use serde_json::json;

/// Generate a schema document with `count` entities
fn generate_schema(count: usize) -> String {
    let entities: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#""entity_{i}": {{"entity{i}Id": "e-{i}", "name": "Entity {i}", "description": "Sample {i}", "price": {}, "quantity": {}, "is_active": {}, "created_at": "2024-01-15T10:30:00Z", "owner": "550e8400-e29b-41d4-a716-446655440000", "tags": ["a", "b"], "meta": {{"k": "v"}}, "type": "entity"}}"#,
                10.5 + i as f64,
                i,
                i % 2 == 0,
            )
        })
        .collect();
    format!("{{{}}}", entities.join(","))
}

/// Benchmark format detection for various string patterns
fn bench_format_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_detection");

    let test_cases = vec![
        ("uuid", "550e8400-e29b-41d4-a716-446655440000"),
        ("date", "2024-01-15"),
        ("datetime", "2024-01-15T10:30:00Z"),
        ("plain_string", "hello world"),
    ];

    for (name, value) in test_cases {
        group.bench_with_input(BenchmarkId::new("detect", name), &value, |b, value| {
            b.iter(|| black_box(detect_format(value)));
        });
    }

    group.finish();
}

/// Benchmark naming derivation
fn bench_naming(c: &mut Criterion) {
    let mut group = c.benchmark_group("naming");

    for word in ["order_item", "productCategory", "XMLHttpRequest", "person"] {
        group.bench_with_input(BenchmarkId::new("pascal", word), &word, |b, word| {
            b.iter(|| black_box(to_pascal_case(word)));
        });
        group.bench_with_input(BenchmarkId::new("plural_kebab", word), &word, |b, word| {
            b.iter(|| black_box(to_kebab_case(&pluralize(word))));
        });
    }

    group.finish();
}

/// Benchmark type inference on composite values
fn bench_type_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_inference");

    let values = vec![
        ("decimal", json!(99.99)),
        ("string_list", json!(["a", "b", "c"])),
        ("nested_list", json!([[1, 2], [3, 4]])),
        ("object", json!({"street": "Main", "zip": 12345})),
    ];

    for (name, value) in values {
        group.bench_with_input(BenchmarkId::new("infer", name), &value, |b, value| {
            b.iter(|| black_box(infer_type(value)));
        });
    }

    group.finish();
}

/// Benchmark schema parsing with varying entity counts
fn bench_schema_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parsing");
    let parser = SchemaParser::new();

    for count in [1, 10, 100].iter() {
        let schema = generate_schema(*count);
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("parse", count), &schema, |b, schema| {
            b.iter(|| black_box(parser.parse(schema)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_naming,
    bench_type_inference,
    bench_schema_parsing
);
criterion_main!(benches);
