// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Shared fixtures for unit tests.

use std::sync::Arc;

use proptest::prelude::*;
use tempfile::TempDir;

use crate::store::{InMemoryStore, LogRecord, SpanRecord};

/// Nanoseconds per second, for readable fixture timestamps.
pub const SECOND: u64 = 1_000_000_000;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// A root span of service `checkout` with span id `{trace_id}-{name}`.
pub fn span(trace_id: &str, name: &str, start: u64) -> SpanRecord {
    SpanRecord {
        trace_id: trace_id.to_string(),
        span_id: format!("{trace_id}-{name}"),
        parent_span_id: String::new(),
        service_name: "checkout".to_string(),
        name: name.to_string(),
        start_time_unix_nano: start,
    }
}

/// An `INFO` log of service `checkout` without a span id.
pub fn log(trace_id: &str, body: &str, timestamp: u64) -> LogRecord {
    LogRecord {
        trace_id: trace_id.to_string(),
        span_id: String::new(),
        service_name: "checkout".to_string(),
        severity_text: "INFO".to_string(),
        body: body.to_string(),
        timestamp_unix_nano: timestamp,
    }
}

/// A store holding one span per name, in order, each in trace `trace-{name}`.
pub fn store_with_spans(names: &[&str]) -> Arc<InMemoryStore> {
    let store = InMemoryStore::new();
    for (index, name) in names.iter().enumerate() {
        store.record_span(span(&format!("trace-{name}"), name, index as u64));
    }
    Arc::new(store)
}

/// A store holding trace `abc` (three spans, two logs, both recorded out of
/// order) and one uncorrelated log.
pub fn trace_store() -> Arc<InMemoryStore> {
    let store = InMemoryStore::new();

    let trace_span = |span_id: &str, parent: &str, service: &str, name: &str, start: u64| {
        SpanRecord {
            trace_id: "abc".to_string(),
            span_id: span_id.to_string(),
            parent_span_id: parent.to_string(),
            service_name: service.to_string(),
            name: name.to_string(),
            start_time_unix_nano: start * SECOND,
        }
    };
    store.record_span(trace_span("s3", "s1", "backend", "serialize", 3));
    store.record_span(trace_span("s1", "", "frontend", "GET /orders", 1));
    store.record_span(trace_span("s2", "s1", "backend", "SELECT orders", 2));

    let trace_log = |span_id: &str, service: &str, body: &str, ts: u64| LogRecord {
        trace_id: "abc".to_string(),
        span_id: span_id.to_string(),
        service_name: service.to_string(),
        severity_text: "INFO".to_string(),
        body: body.to_string(),
        timestamp_unix_nano: ts * SECOND,
    };
    store.record_log(trace_log("s2", "backend", "row loaded", 2));
    store.record_log(trace_log("s1", "frontend", "request received", 1));
    store.record_log(LogRecord {
        service_name: "scheduler".to_string(),
        ..log("", "tick", 3 * SECOND)
    });

    Arc::new(store)
}

/// Strategy for trace identifiers: short hex strings.
pub fn trace_id_strategy() -> BoxedStrategy<String> {
    "[0-9a-f]{1,32}".boxed()
}
