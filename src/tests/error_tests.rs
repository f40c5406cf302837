// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Tests for the error module.

use crate::error::config::ConfigError;
use crate::error::store::StoreError;
use crate::error::transport::TransportError;
use crate::error::{ErrorContext, ErrorReporter, GatewayError, GatewayResult};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = GatewayError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "server").with_details("while binding");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("Error in server"));
    assert!(display_string.contains("Details: while binding"));
}

/// Test that component errors convert into the crate error.
#[test]
fn test_component_errors_convert() {
    fn fails() -> GatewayResult<()> {
        Err(ConfigError::ValidationError("bad level".to_string()))?
    }
    let error = fails().unwrap_err();
    assert!(matches!(error, GatewayError::Config(_)));
    assert!(error.to_string().contains("bad level"));

    let error: GatewayError = TransportError::ShutdownTimeout(Duration::from_millis(5)).into();
    assert!(matches!(error, GatewayError::Transport(_)));

    let error: GatewayError = StoreError::SnapshotNotFound(PathBuf::from("seed.json")).into();
    assert!(error.to_string().contains("seed.json"));
}

/// Test that bind failures keep their source.
#[test]
fn test_bind_error_source() {
    use std::error::Error;

    let error = TransportError::Bind {
        address: "127.0.0.1:1".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(error.to_string().contains("127.0.0.1:1"));
    assert!(error.source().is_some());
}

#[derive(Debug, Default)]
struct CountingReporter {
    reported: AtomicUsize,
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _context: &ErrorContext) {
        self.reported.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that reporters can be used through the trait object.
#[test]
fn test_error_reporter_trait_object() {
    let reporter = CountingReporter::default();
    let dyn_reporter: &dyn ErrorReporter = &reporter;

    dyn_reporter.report(&ErrorContext::new(GatewayError::Custom("one".into()), "main"));
    dyn_reporter.report(&ErrorContext::new(GatewayError::Custom("two".into()), "main"));

    assert_eq!(reporter.reported.load(Ordering::SeqCst), 2);
}
