use criterion::{Criterion, black_box, criterion_group, criterion_main};
use plainjson::Options;
use plainjson::dynamic::ObjectMap;
use uuid::Uuid;

fn nested(depth: usize, breadth: usize) -> ObjectMap {
    let mut m = ObjectMap::new();
    for i in 0..breadth {
        if depth == 0 {
            m.set(format!("k{}", i), i as i64);
        } else {
            m.set(format!("k{}", i), nested(depth - 1, breadth));
        }
    }
    m
}

fn wide_record() -> ObjectMap {
    let mut m = ObjectMap::new();
    m.set("id", Uuid::new_v4());
    m.set("name", "benchmark".to_string());
    m.set("score", 99.25f64);
    m.set("tags", vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    let mut rows = Vec::new();
    for i in 0..256i64 {
        rows.push(i);
    }
    m.set("rows", rows);
    m
}

fn bench_stringify(c: &mut Criterion) {
    let nested_input = nested(4, 4);
    let wide_input = wide_record();
    let compact = Options::default();
    let pretty = Options {
        indent: true,
        sort_keys: true,
        ..Options::default()
    };

    c.bench_function("stringify_nested_compact", |b| {
        b.iter(|| plainjson::stringify(black_box(&nested_input), &compact).unwrap())
    });
    c.bench_function("stringify_nested_pretty", |b| {
        b.iter(|| plainjson::stringify(black_box(&nested_input), &pretty).unwrap())
    });
    c.bench_function("stringify_wide_compact", |b| {
        b.iter(|| plainjson::stringify(black_box(&wide_input), &compact).unwrap())
    });
}

fn bench_parse(c: &mut Criterion) {
    let nested_input = nested(4, 4);
    let opts = Options::default();
    c.bench_function("parse_nested", |b| {
        b.iter(|| plainjson::parse(black_box(&nested_input), &opts).unwrap())
    });
}

criterion_group!(benches, bench_stringify, bench_parse);
criterion_main!(benches);
