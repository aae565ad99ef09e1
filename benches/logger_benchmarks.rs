//! Criterion benchmarks for console_logger_system

use console_logger_system::core::format::format_record;
use console_logger_system::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::json;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("root_default", |b| {
        b.iter(|| {
            let logger = Logger::new();
            black_box(logger)
        });
    });

    group.bench_function("root_with_write_fn", |b| {
        b.iter(|| {
            let logger = Logger::builder().write_fn(|_| {}).build();
            black_box(logger)
        });
    });

    group.bench_function("child_derivation", |b| {
        let logger = Logger::builder().write_fn(|_| {}).build();
        b.iter(|| {
            let child = logger.child(json!({"module": "bench"})).unwrap();
            black_box(child)
        });
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let write_logger = Logger::builder().write_fn(|record| {
        black_box(record);
    }).build();

    group.bench_function("write_fn_string", |b| {
        b.iter(|| {
            write_logger.info(black_box("benchmark message"));
        });
    });

    let silent_logger = Logger::builder()
        .level(Threshold::Silent)
        .write_fn(|_| {})
        .build();

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            silent_logger.info(black_box("dropped"));
        });
    });

    let child = write_logger
        .child(json!({"a": 1}))
        .unwrap()
        .child(json!({"b": 2}))
        .unwrap();

    group.bench_function("write_fn_child_depth_2", |b| {
        b.iter(|| {
            child.info(black_box("benchmark message"));
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let chain = BindingChain::new();
    let interpolation_args = [
        LogArgument::from("user %s finished %d items (%j)"),
        LogArgument::from("alice"),
        LogArgument::from(42i64),
        LogArgument::from(json!({"batch": 7})),
    ];

    group.bench_function("interpolation", |b| {
        b.iter(|| {
            let record = format_record(
                LogLevel::Info,
                black_box(&chain),
                black_box(&interpolation_args[..]),
            );
            black_box(record)
        });
    });

    let object_args = [
        LogArgument::from(json!({"user": "alice", "items": 42})),
        LogArgument::from("done"),
    ];

    group.bench_function("object_merge", |b| {
        b.iter(|| {
            let record = format_record(
                LogLevel::Info,
                black_box(&chain),
                black_box(&object_args[..]),
            );
            black_box(record)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_dispatch,
    bench_formatting
);
criterion_main!(benches);
