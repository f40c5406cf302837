// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! The query operations behind every tool call and REST lookup.

use std::sync::Arc;

use tracing::debug;

use crate::store::{LogRecord, SpanRecord, TelemetryStore};

/// Number of items listed when a call does not give a usable `limit`.
pub const DEFAULT_LIMIT: i64 = 5;

/// Runs lookups against an injected store.
#[derive(Clone)]
pub struct QueryExecutor {
    store: Arc<dyn TelemetryStore>,
}

impl std::fmt::Debug for QueryExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryExecutor").finish_non_exhaustive()
    }
}

impl QueryExecutor {
    /// Creates an executor over `store`.
    pub fn new(store: Arc<dyn TelemetryStore>) -> Self {
        Self { store }
    }

    /// The most recent `limit` spans, oldest first.
    ///
    /// `limit <= 0` or a limit at or above the span count returns every span.
    pub fn list_traces(&self, limit: i64) -> Vec<SpanRecord> {
        let spans = window(self.store.recent_spans(), limit);
        debug!(limit, returned = spans.len(), "list_traces");
        spans
    }

    /// Spans of `trace_id` sorted by start time, or `None` if the trace is unknown.
    pub fn get_trace(&self, trace_id: &str) -> Option<Vec<SpanRecord>> {
        let mut spans = self.store.spans_by_trace_id(trace_id)?;
        spans.sort_by_key(|span| span.start_time_unix_nano);
        debug!(trace_id, returned = spans.len(), "get_trace");
        Some(spans)
    }

    /// The most recent `limit` visible logs, oldest first.
    pub fn list_logs(&self, limit: i64) -> Vec<LogRecord> {
        let logs = window(self.store.visible_logs(), limit);
        debug!(limit, returned = logs.len(), "list_logs");
        logs
    }

    /// Logs of `trace_id` sorted by timestamp, or `None` if there are none.
    pub fn get_logs_for_trace(&self, trace_id: &str) -> Option<Vec<LogRecord>> {
        let mut logs = self.store.logs_by_trace_id(trace_id)?;
        logs.sort_by_key(|log| log.timestamp_unix_nano);
        debug!(trace_id, returned = logs.len(), "get_logs_for_trace");
        Some(logs)
    }
}

/// Keeps the last `limit` items of `items`, preserving their order.
///
/// Non-positive limits and limits at or above `items.len()` keep everything.
pub fn window<T>(mut items: Vec<T>, limit: i64) -> Vec<T> {
    match usize::try_from(limit) {
        Ok(n) if n > 0 && n < items.len() => {
            let start = items.len() - n;
            items.split_off(start)
        }
        _ => items,
    }
}
