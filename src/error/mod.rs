// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Error module for the telemetry gateway.
//!
//! Errors in this module describe failures of the gateway process itself:
//! configuration, transport and store seeding. Protocol-level failures seen by
//! clients are not Rust errors; they are JSON-RPC error objects built in
//! [`crate::protocol::jsonrpc::error`].

use std::fmt::{Display, Formatter};
use thiserror::Error;

pub mod config;
pub mod store;
pub mod transport;

/// Result type alias used throughout the gateway.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Core error enum for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised while binding, serving or shutting down the HTTP server.
    #[error("Transport error: {0}")]
    Transport(#[from] transport::TransportError),

    /// Errors raised while seeding the in-memory store.
    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// An error together with the component it surfaced in.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: GatewayError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: GatewayError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Sink for errors that end a component's work.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: &ErrorContext);
}

/// Reports errors as `tracing` events.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}
