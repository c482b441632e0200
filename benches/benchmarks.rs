use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use media_type::{is_restricted_name, MediaType, Parameter};

// Benchmark media type parsing
fn bench_parse_media_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_media_type");

    let test_cases = vec![
        ("simple", "text/html"),
        ("with_charset", "text/html; charset=utf-8"),
        ("suffix", "application/vnd.api+json"),
        ("quoted", "application/octet-stream;charset=\"UTF-8\""),
        (
            "complex",
            "multipart/form-data; boundary=----WebKitFormBoundary7MA4YWxkTrZu0gW, charset=utf-8",
        ),
        ("invalid", "unknown/json; charset=utf-8"),
    ];

    for (name, input) in test_cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, &input| {
            b.iter(|| MediaType::maybe(black_box(input)));
        });
    }

    group.finish();
}

// Benchmark parameter parsing
fn bench_parse_parameter(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_parameter");

    group.bench_function("token", |b| {
        b.iter(|| Parameter::parse(black_box("charset=utf-8")));
    });

    group.bench_function("quoted", |b| {
        b.iter(|| Parameter::parse(black_box("charset=\"utf-8\"")));
    });

    group.finish();
}

// Benchmark media type formatting
fn bench_format_media_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_media_type");

    let media_type = MediaType::new(
        "multipart",
        "form-data",
        "",
        vec![
            Parameter::new("charset", "utf-8").unwrap(),
            Parameter::new("boundary", "----boundary").unwrap(),
        ],
    )
    .unwrap();

    group.bench_function("with_params", |b| {
        b.iter(|| black_box(&media_type).to_string());
    });

    group.finish();
}

// Benchmark restricted name validation
fn bench_restricted_name(c: &mut Criterion) {
    let long = "a".repeat(127);

    c.bench_function("is_restricted_name_short", |b| {
        b.iter(|| is_restricted_name(black_box("vnd.api")));
    });

    c.bench_function("is_restricted_name_long", |b| {
        b.iter(|| is_restricted_name(black_box(&long)));
    });
}

criterion_group!(
    benches,
    bench_parse_media_type,
    bench_parse_parameter,
    bench_format_media_type,
    bench_restricted_name,
);
criterion_main!(benches);
