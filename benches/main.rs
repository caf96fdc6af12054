
use criterion::{criterion_group, criterion_main};

criterion_group!(
    style,
    style::benchmark_build,
    style::benchmark_emit,
    style::benchmark_load,
);
criterion_main!(style);
