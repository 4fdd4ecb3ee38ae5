use crate::common::configure_criterion;
use coded_error::{Code, CodedError, CODE_BAD_REQUEST, CODE_NOT_FOUND};
use criterion::{criterion_group, Criterion};
use std::hint::black_box;

pub fn bench_code_construction(c: &mut Criterion) {
    c.bench_function("creation/code_ad_hoc", |b| {
        b.iter(|| black_box(Code::new(black_box(40401003), "account not found")))
    });

    c.bench_function("creation/http_status", |b| {
        b.iter(|| black_box(black_box(&CODE_NOT_FOUND).http_status()))
    });
}

pub fn bench_error_construction(c: &mut Criterion) {
    c.bench_function("creation/coded_error_new", |b| {
        b.iter(|| black_box(CodedError::new(CODE_NOT_FOUND)))
    });

    c.bench_function("creation/coded_error_wrap", |b| {
        b.iter(|| black_box(CodedError::wrap(CODE_BAD_REQUEST, std::io::Error::other("bad input"))))
    });
}

criterion_group! {
    name = creation_benches;
    config = configure_criterion();
    targets = bench_code_construction, bench_error_construction,
}
