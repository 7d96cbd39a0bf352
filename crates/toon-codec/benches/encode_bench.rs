use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;
use toon_codec::EncodeOptions;

fn tabular_fixture(rows: usize) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (0..rows)
        .map(|i| json!({"id": i, "name": format!("user{}", i), "active": i % 2 == 0}))
        .collect();
    json!({ "users": items })
}

fn bench_encode(c: &mut Criterion) {
    let small = tabular_fixture(10);
    let large = tabular_fixture(1000);
    let opts = EncodeOptions::default();

    c.bench_function("encode_tabular_10", |b| {
        b.iter(|| toon_codec::encode_json(black_box(&small), &opts).unwrap())
    });
    c.bench_function("encode_tabular_1000", |b| {
        b.iter(|| toon_codec::encode_json(black_box(&large), &opts).unwrap())
    });

    let nested = json!({"a": {"b": {"c": {"d": [1, 2, 3], "e": "text"}}}});
    c.bench_function("encode_nested", |b| {
        b.iter(|| toon_codec::encode_json(black_box(&nested), &opts).unwrap())
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
