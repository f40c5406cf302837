// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Response rendering.
//!
//! Tool calls get a single newline-delimited text block meant to be read by a
//! language model. REST lookups get a JSON array of projections with stable
//! field names.

use std::fmt::Write;

use chrono::DateTime;
use serde::Serialize;

use crate::store::{LogRecord, SpanRecord};

/// Tool text for a `get_trace` miss.
pub const TRACE_NOT_FOUND: &str = "trace not found";

/// Tool text for a `get_logs_for_trace` miss.
pub const LOGS_NOT_FOUND: &str = "no logs found";

/// REST view of a span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanProjection {
    /// Trace identifier
    pub trace_id: String,
    /// Span identifier
    pub span_id: String,
    /// Parent span identifier, empty for roots
    #[serde(rename = "parent_id")]
    pub parent_span_id: String,
    /// Span display name
    #[serde(rename = "name")]
    pub span_name: String,
    /// Emitting service
    #[serde(rename = "service")]
    pub service_name: String,
    /// Start time, Unix nanoseconds
    pub start_timestamp: u64,
}

impl From<&SpanRecord> for SpanProjection {
    fn from(span: &SpanRecord) -> Self {
        Self {
            trace_id: span.trace_id.clone(),
            span_id: span.span_id.clone(),
            parent_span_id: span.parent_span_id.clone(),
            span_name: span.name.clone(),
            service_name: span.service_name.clone(),
            start_timestamp: span.start_time_unix_nano,
        }
    }
}

/// REST view of a log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogProjection {
    /// Trace identifier
    pub trace_id: String,
    /// Span identifier
    pub span_id: String,
    /// Resolved body text
    #[serde(rename = "body")]
    pub body_text: String,
    /// Emitting service
    #[serde(rename = "service")]
    pub service_name: String,
    /// Severity text
    pub severity: String,
    /// Record time, Unix nanoseconds
    pub timestamp: u64,
}

impl From<&LogRecord> for LogProjection {
    fn from(log: &LogRecord) -> Self {
        Self {
            trace_id: log.trace_id.clone(),
            span_id: log.span_id.clone(),
            body_text: log.body.clone(),
            service_name: log.service_name.clone(),
            severity: log.severity_text.clone(),
            timestamp: log.timestamp_unix_nano,
        }
    }
}

/// Projects spans for the REST surface, keeping their order.
pub fn span_projections(spans: &[SpanRecord]) -> Vec<SpanProjection> {
    spans.iter().map(SpanProjection::from).collect()
}

/// Projects logs for the REST surface, keeping their order.
pub fn log_projections(logs: &[LogRecord]) -> Vec<LogProjection> {
    logs.iter().map(LogProjection::from).collect()
}

/// `service | name | trace id` per span.
pub fn trace_list_text(spans: &[SpanRecord]) -> String {
    let mut text = String::new();
    for span in spans {
        let _ = writeln!(text, "{} | {} | {}", span.service_name, span.name, span.trace_id);
    }
    text
}

/// `service | name | span:id parent:id` per span.
pub fn trace_text(spans: &[SpanRecord]) -> String {
    let mut text = String::new();
    for span in spans {
        let _ = writeln!(
            text,
            "{} | {} | span:{} parent:{}",
            span.service_name, span.name, span.span_id, span.parent_span_id
        );
    }
    text
}

/// `time | service | body | trace:id` per log.
pub fn log_list_text(logs: &[LogRecord]) -> String {
    let mut text = String::new();
    for log in logs {
        let _ = writeln!(
            text,
            "{} | {} | {} | trace:{}",
            timestamp_text(log.timestamp_unix_nano),
            log.service_name,
            log.body,
            log.trace_id
        );
    }
    text
}

/// `time | service | body` per log.
pub fn trace_logs_text(logs: &[LogRecord]) -> String {
    let mut text = String::new();
    for log in logs {
        let _ = writeln!(
            text,
            "{} | {} | {}",
            timestamp_text(log.timestamp_unix_nano),
            log.service_name,
            log.body
        );
    }
    text
}

/// Formats Unix nanoseconds as UTC `YYYY/MM/DD HH:MM:SS`.
pub fn timestamp_text(unix_nano: u64) -> String {
    // Timestamps past 2262 do not fit chrono's nanosecond range
    let nanos = i64::try_from(unix_nano).unwrap_or(i64::MAX);
    DateTime::from_timestamp_nanos(nanos)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}
