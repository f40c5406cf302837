// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Read-only interface to the telemetry store.
//!
//! The store owns ingestion, indexing and retention. The gateway only ever
//! calls the four lookups of [`TelemetryStore`] and never mutates what it gets
//! back beyond reordering its own copy.

use serde::{Deserialize, Serialize};

pub mod memory;

pub use memory::InMemoryStore;

/// A span as recorded by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRecord {
    /// Hex trace identifier
    pub trace_id: String,

    /// Hex span identifier
    pub span_id: String,

    /// Hex parent span identifier, empty for root spans
    #[serde(default)]
    pub parent_span_id: String,

    /// `service.name` of the emitting resource
    pub service_name: String,

    /// Display name of the span
    pub name: String,

    /// Start time in nanoseconds since the Unix epoch
    pub start_time_unix_nano: u64,
}

/// A log record as recorded by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Hex trace identifier, empty when the log is not correlated
    #[serde(default)]
    pub trace_id: String,

    /// Hex span identifier, empty when the log is not correlated
    #[serde(default)]
    pub span_id: String,

    /// `service.name` of the emitting resource
    pub service_name: String,

    /// Severity text such as `INFO` or `ERROR`
    #[serde(default)]
    pub severity_text: String,

    /// Body resolved to its text form
    pub body: String,

    /// Record time in nanoseconds since the Unix epoch
    pub timestamp_unix_nano: u64,
}

/// Read operations the gateway consumes.
///
/// Implementations answer synchronously and must be safe to share between
/// concurrent requests.
#[cfg_attr(test, mockall::automock)]
pub trait TelemetryStore: Send + Sync {
    /// All retained spans in arrival order.
    fn recent_spans(&self) -> Vec<SpanRecord>;

    /// Spans belonging to `trace_id`, or `None` when the trace is unknown.
    fn spans_by_trace_id(&self, trace_id: &str) -> Option<Vec<SpanRecord>>;

    /// Logs that pass the store-side filter, in arrival order.
    fn visible_logs(&self) -> Vec<LogRecord>;

    /// Logs correlated with `trace_id`, or `None` when there are none.
    fn logs_by_trace_id(&self, trace_id: &str) -> Option<Vec<LogRecord>>;
}
