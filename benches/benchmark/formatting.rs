use crate::common::{configure_criterion, layered_error};
use coded_error::FormatMode;
use criterion::{criterion_group, Criterion};
use std::hint::black_box;

pub fn bench_render_modes(c: &mut Criterion) {
    let err = layered_error();
    // resolve frames once so the benchmark measures rendering only
    let _ = err.render(FormatMode::Verbose).to_string();

    for (name, mode) in [
        ("formatting/plain", FormatMode::Plain),
        ("formatting/quoted", FormatMode::Quoted),
        ("formatting/verbose", FormatMode::Verbose),
        ("formatting/detailed", FormatMode::Detailed),
    ] {
        c.bench_function(name, |b| b.iter(|| black_box(err.render(mode).to_string())));
    }
}

#[cfg(feature = "serde")]
pub fn bench_wire_round_trip(c: &mut Criterion) {
    use coded_error::CodedError;

    let err = layered_error();
    let json = serde_json::to_string(&err).unwrap();

    c.bench_function("wire/serialize", |b| {
        b.iter(|| black_box(serde_json::to_string(black_box(&err)).unwrap()))
    });

    c.bench_function("wire/deserialize", |b| {
        b.iter(|| black_box(serde_json::from_str::<CodedError>(black_box(&json)).unwrap()))
    });
}

criterion_group! {
    name = formatting_benches;
    config = configure_criterion();
    targets = bench_render_modes,
}

#[cfg(feature = "serde")]
criterion_group! {
    name = wire_benches;
    config = configure_criterion();
    targets = bench_wire_round_trip,
}
