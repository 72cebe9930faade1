//! Stress tests for concurrent use of a shared adapter
//!
//! These tests verify:
//! - No records are lost when many threads share one adapter
//! - Adapters from one factory can log concurrently into a shared file
//! - Per-thread call order is preserved by the sink

use application_logging_adapter::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

#[test]
fn test_shared_adapter_loses_nothing() {
    let sink = Arc::new(MemoryLogger::new("stress"));
    let adapter = LoggerAdapter::new(sink.clone());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let adapter = adapter.clone();
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    adapter
                        .log_event(i as i32, LogLevel::Information, &format!("thread {}", t))
                        .expect("memory sink never fails");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(sink.len(), THREADS * PER_THREAD);
}

#[test]
fn test_per_thread_order_preserved() {
    let sink = Arc::new(MemoryLogger::new("ordering"));
    let adapter: Arc<dyn ApplicationLogger> = Arc::new(LoggerAdapter::new(sink.clone()));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let adapter = Arc::clone(&adapter);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    adapter
                        .log_event(i as i32, LogLevel::Debug, &t.to_string())
                        .expect("memory sink never fails");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let mut last_seen: HashMap<String, i32> = HashMap::new();
    for record in sink.records() {
        let id = record.event_id.expect("event id forwarded").id;
        if let Some(previous) = last_seen.insert(record.message.clone(), id) {
            assert!(id > previous, "thread {} out of order", record.message);
        }
    }
    assert_eq!(last_seen.len(), THREADS);
}

#[test]
fn test_factory_adapters_share_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.jsonl");

    let provider =
        Arc::new(JsonFileLoggerProvider::new(&log_file).expect("Failed to open log file"));
    let factory = AdapterFactory::new(provider.clone());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let adapter = factory.create(&format!("component-{}", t));
            thread::spawn(move || {
                for i in 0..100 {
                    adapter
                        .log(LogLevel::Warning, &format!("message {}", i))
                        .expect("write failed");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    provider.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * 100);
    for line in lines {
        let parsed: serde_json::Value = serde_json::from_str(line).expect("line is valid JSON");
        assert_eq!(parsed["severity"], "WARN");
    }
}
