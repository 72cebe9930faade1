//! Criterion benchmarks for application_logging_adapter

use application_logging_adapter::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::error::Error;
use std::sync::Arc;

/// Structured logger that does nothing, so only adapter overhead is measured
struct NullLogger;

impl StructuredLogger for NullLogger {
    fn log(
        &self,
        _severity: Severity,
        _event_id: Option<EventId>,
        _error: Option<&(dyn Error + 'static)>,
        _message: &str,
    ) -> Result<()> {
        Ok(())
    }
}

fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");
    group.throughput(Throughput::Elements(LogLevel::ALL.len() as u64));

    group.bench_function("all_levels", |b| {
        b.iter(|| {
            for level in LogLevel::ALL {
                black_box(Severity::from(black_box(level)));
            }
        });
    });

    group.finish();
}

fn bench_forwarding(c: &mut Criterion) {
    let mut group = c.benchmark_group("forwarding");
    group.throughput(Throughput::Elements(1));

    let adapter = LoggerAdapter::new(Arc::new(NullLogger));
    let error = std::io::Error::other("bench");

    group.bench_function("log", |b| {
        b.iter(|| adapter.log(black_box(LogLevel::Information), black_box("message")));
    });

    group.bench_function("log_event_error_from", |b| {
        b.iter(|| {
            adapter.log_event_error_from(
                black_box(&0_u8),
                black_box(42),
                black_box(LogLevel::Error),
                black_box("message"),
                &error,
            )
        });
    });

    group.finish();
}

fn bench_memory_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_sink");
    group.throughput(Throughput::Elements(1));

    let sink = Arc::new(MemoryLogger::new("bench"));
    let adapter = LoggerAdapter::new(sink.clone());

    group.bench_function("log_event", |b| {
        b.iter(|| adapter.log_event(black_box(7), LogLevel::Warning, black_box("message")));
        sink.clear();
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_translation,
    bench_forwarding,
    bench_memory_sink
);
criterion_main!(benches);
