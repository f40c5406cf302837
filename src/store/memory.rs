// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! In-memory [`TelemetryStore`].
//!
//! Keeps spans and logs in arrival order plus a per-trace index for each.
//! Used by the binary (optionally seeded from a JSON snapshot) and by tests in
//! place of a live ingestion pipeline.

use std::path::Path;

use dashmap::DashMap;
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{debug, info};

use super::{LogRecord, SpanRecord, TelemetryStore};
use crate::config::StoreConfig;
use crate::error::store::StoreError;

/// Snapshot file layout: spans and logs in arrival order.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    /// Spans to record
    #[serde(default)]
    pub spans: Vec<SpanRecord>,

    /// Logs to record
    #[serde(default)]
    pub logs: Vec<LogRecord>,
}

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    spans: RwLock<Vec<SpanRecord>>,
    spans_by_trace: DashMap<String, Vec<SpanRecord>>,
    logs: RwLock<Vec<LogRecord>>,
    logs_by_trace: DashMap<String, Vec<LogRecord>>,
    log_filter: RwLock<Option<String>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from configuration, loading the snapshot if one is set.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let store = Self::new();
        store.set_log_filter(config.log_filter.clone());
        if let Some(path) = &config.snapshot_file {
            store.load_snapshot(path)?;
        }
        Ok(store)
    }

    /// Records a span at the end of the arrival list.
    ///
    /// The index is updated while the arrival list is still locked, so a span
    /// found by trace id is listed by the time `recent_spans` can read.
    pub fn record_span(&self, span: SpanRecord) {
        let mut spans = self.spans.write();
        self.spans_by_trace
            .entry(span.trace_id.clone())
            .or_default()
            .push(span.clone());
        spans.push(span);
    }

    /// Records a log at the end of the arrival list.
    ///
    /// Logs without a trace id are listed but not indexed.
    pub fn record_log(&self, log: LogRecord) {
        let mut logs = self.logs.write();
        if !log.trace_id.is_empty() {
            self.logs_by_trace
                .entry(log.trace_id.clone())
                .or_default()
                .push(log.clone());
        }
        logs.push(log);
    }

    /// Restricts [`TelemetryStore::visible_logs`] to bodies containing `filter`.
    pub fn set_log_filter(&self, filter: Option<String>) {
        *self.log_filter.write() = filter.filter(|f| !f.is_empty());
    }

    /// Records every span and log of a JSON snapshot file, in file order.
    pub fn load_snapshot(&self, path: &Path) -> Result<(), StoreError> {
        if !path.exists() {
            return Err(StoreError::SnapshotNotFound(path.to_path_buf()));
        }
        let raw = std::fs::read(path).map_err(|source| StoreError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot =
            serde_json::from_slice(&raw).map_err(|source| StoreError::SnapshotParse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            spans = snapshot.spans.len(),
            logs = snapshot.logs.len(),
            "Loading telemetry snapshot"
        );
        for span in snapshot.spans {
            self.record_span(span);
        }
        for log in snapshot.logs {
            self.record_log(log);
        }
        Ok(())
    }
}

impl TelemetryStore for InMemoryStore {
    fn recent_spans(&self) -> Vec<SpanRecord> {
        self.spans.read().clone()
    }

    fn spans_by_trace_id(&self, trace_id: &str) -> Option<Vec<SpanRecord>> {
        self.spans_by_trace.get(trace_id).map(|spans| spans.value().clone())
    }

    fn visible_logs(&self) -> Vec<LogRecord> {
        let logs = self.logs.read();
        match self.log_filter.read().as_deref() {
            Some(filter) => {
                let visible: Vec<LogRecord> = logs
                    .iter()
                    .filter(|log| log.body.contains(filter))
                    .cloned()
                    .collect();
                debug!(filter, total = logs.len(), visible = visible.len(), "Filtered logs");
                visible
            }
            None => logs.clone(),
        }
    }

    fn logs_by_trace_id(&self, trace_id: &str) -> Option<Vec<LogRecord>> {
        self.logs_by_trace.get(trace_id).map(|logs| logs.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_utils::{log, span, trace_id_strategy};
    use proptest::prelude::*;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_arrival_order_and_index() {
        let store = InMemoryStore::new();
        store.record_span(span("t1", "a", 30));
        store.record_span(span("t2", "b", 10));
        store.record_span(span("t1", "c", 20));

        let names: Vec<_> = store.recent_spans().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["a", "b", "c"]);

        let trace = store.spans_by_trace_id("t1").unwrap();
        assert_eq!(trace.len(), 2);
        assert!(store.spans_by_trace_id("missing").is_none());
        assert!(store.spans_by_trace_id("").is_none());
    }

    #[test]
    fn test_uncorrelated_logs_are_not_indexed() {
        let store = InMemoryStore::new();
        store.record_log(log("", "boot", 1));
        store.record_log(log("t1", "handled", 2));

        assert_eq!(store.visible_logs().len(), 2);
        assert!(store.logs_by_trace_id("").is_none());
        assert_eq!(store.logs_by_trace_id("t1").unwrap().len(), 1);
    }

    #[test]
    fn test_log_filter_limits_visible_logs() {
        let store = InMemoryStore::new();
        store.record_log(log("t1", "cache miss", 1));
        store.record_log(log("t1", "request done", 2));
        store.set_log_filter(Some("miss".to_string()));

        let visible = store.visible_logs();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].body, "cache miss");
        // Index lookups are not filtered
        assert_eq!(store.logs_by_trace_id("t1").unwrap().len(), 2);

        store.set_log_filter(Some(String::new()));
        assert_eq!(store.visible_logs().len(), 2);
    }

    #[test]
    fn test_load_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{
                "spans": [
                    {"trace_id": "t1", "span_id": "s1", "service_name": "api", "name": "GET /", "start_time_unix_nano": 5}
                ],
                "logs": [
                    {"trace_id": "t1", "service_name": "api", "severity_text": "INFO", "body": "ok", "timestamp_unix_nano": 6}
                ]
            }"#,
        )
        .unwrap();

        let config = StoreConfig {
            snapshot_file: Some(path),
            log_filter: None,
        };
        let store = InMemoryStore::from_config(&config).unwrap();
        assert_eq!(store.recent_spans()[0].parent_span_id, "");
        assert_eq!(store.logs_by_trace_id("t1").unwrap()[0].span_id, "");
    }

    #[test]
    fn test_load_snapshot_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let store = InMemoryStore::new();
        assert!(matches!(
            store.load_snapshot(&missing),
            Err(StoreError::SnapshotNotFound(_))
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            store.load_snapshot(&broken),
            Err(StoreError::SnapshotParse { .. })
        ));
    }

    #[test]
    fn test_indexed_span_is_already_listed() {
        let store = Arc::new(InMemoryStore::new());
        const SPANS: usize = 2_000;

        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..SPANS {
                    store.record_span(span(&format!("t{i}"), "op", i as u64));
                }
            })
        };

        let mut checked = 0;
        while checked < SPANS {
            if store.spans_by_trace_id(&format!("t{checked}")).is_some() {
                assert!(store.recent_spans().len() > checked);
                checked += 1;
            } else {
                std::thread::yield_now();
            }
        }
        writer.join().unwrap();
    }

    proptest! {
        #[test]
        fn prop_recorded_traces_are_indexed(ids in prop::collection::vec(trace_id_strategy(), 1..20)) {
            let store = InMemoryStore::new();
            for (i, id) in ids.iter().enumerate() {
                store.record_span(span(id, &i.to_string(), i as u64));
            }

            prop_assert_eq!(store.recent_spans().len(), ids.len());
            for id in &ids {
                let expected = ids.iter().filter(|other| *other == id).count();
                prop_assert_eq!(store.spans_by_trace_id(id).map(|s| s.len()), Some(expected));
            }
        }
    }
}
