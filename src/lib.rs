// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Telemetry Gateway Library
//!
//! A read-only query gateway over recently ingested traces and logs. The
//! library holds the protocol surfaces, the query executor and formatter, the
//! store interface with an in-memory implementation, and the HTTP server that
//! ties them together. The binary crate is a thin shell around [`server`].
//!
//! # Architecture
//!
//! - [`protocol`]: JSON-RPC 2.0 tool dispatch and the REST lookups
//! - [`query`]: ordering, limiting and rendering of store results
//! - [`store`]: the [`TelemetryStore`](store::TelemetryStore) interface
//! - [`server`]: listener lifecycle and routing
//! - [`config`] and [`error`]: ambient configuration and error types

pub mod config;
pub mod error;
pub mod protocol;
pub mod query;
pub mod server;
pub mod store;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the telemetry gateway.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
