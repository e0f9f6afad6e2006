use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use field_rail::translate::Registry;
use field_rail::{Error, Errors};
use std::hint::black_box;

fn sample_errors(len: usize) -> Errors {
    (0..len)
        .map(|i| {
            let field = ["name", "email", "age", "tags"][i % 4];
            Error::new("min_length").with_subject(field, field, "").with_param("min", i)
        })
        .collect()
}

pub fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("errors");

    group.bench_function("add_flatten", |b| {
        b.iter(|| {
            let mut errors = Errors::new();
            errors.add(Error::new("required"));
            errors.add(sample_errors(8));
            black_box(errors)
        })
    });

    let errors = sample_errors(64);
    group.bench_function("groups", |b| b.iter(|| black_box(errors.groups().len())));
    group.bench_function("to_map", |b| b.iter(|| black_box(errors.to_map().len())));
    group.bench_function("display", |b| b.iter(|| black_box(errors.to_string())));

    group.finish();
}

pub fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let english = Registry::english();
    let chinese = Registry::chinese();
    let err = Error::new("length_between")
        .with_subject("name", "Name", "a")
        .with_param("min", 2)
        .with_param("max", 16);

    group.bench_function("english_template", |b| b.iter(|| black_box(err.render(&english))));
    group.bench_function("chinese_template", |b| b.iter(|| black_box(err.render(&chinese))));

    let typed = Error::new("typeof").with_subject("age", "Age", "x").with_param("kind", "int");
    group.bench_function("typeof_translator", |b| b.iter(|| black_box(typed.render(&english))));

    let custom = Error::new("custom").with_format("{label} needs {min}..{max} ({value})");
    group.bench_function("explicit_format", |b| {
        b.iter(|| black_box(custom.render(&Registry::new())))
    });

    group.finish();
}

#[cfg(feature = "serde")]
pub fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serde");
    let errors = sample_errors(16);

    group.bench_function("errors_to_json", |b| {
        b.iter(|| black_box(serde_json::to_string(&errors).unwrap_or_default()))
    });

    group.finish();
}

criterion_group! {
    name = errors_benches;
    config = configure_criterion();
    targets = bench_aggregation, bench_rendering,
}

#[cfg(feature = "serde")]
criterion_group! {
    name = serde_benches;
    config = configure_criterion();
    targets = bench_serialization,
}
