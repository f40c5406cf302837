// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Transport error module.
//!
//! Failures of the HTTP listener that serves both the JSON-RPC and the REST
//! surface.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while running the gateway's HTTP server.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The listen address could not be bound.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// Address as configured
        address: String,
        /// Underlying socket error
        #[source]
        source: io::Error,
    },

    /// `start` was called on a server that is already listening.
    #[error("Server already started")]
    AlreadyStarted,

    /// The serving loop ended with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[from] io::Error),

    /// In-flight requests did not finish before the shutdown deadline.
    #[error("Shutdown did not complete within {0:?}")]
    ShutdownTimeout(Duration),

    /// The serving task panicked or was cancelled.
    #[error("Server task failed: {0}")]
    Task(String),
}
