// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Query execution and rendering shared by both protocol surfaces.
//!
//! [`QueryExecutor`] performs the four lookups against a [`TelemetryStore`]
//! and applies ordering and limiting; [`render`] turns the results into tool
//! text or REST projections.
//!
//! [`TelemetryStore`]: crate::store::TelemetryStore

pub mod executor;
pub mod render;

pub use executor::{window, QueryExecutor, DEFAULT_LIMIT};
