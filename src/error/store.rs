// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Store error module.
//!
//! Only seeding the in-memory store can fail; reads never do.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a telemetry snapshot into the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The snapshot file does not exist.
    #[error("Snapshot file not found: {0}")]
    SnapshotNotFound(PathBuf),

    /// The snapshot file could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    SnapshotRead {
        /// Path of the snapshot
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not a valid telemetry snapshot.
    #[error("Invalid snapshot {path}: {source}")]
    SnapshotParse {
        /// Path of the snapshot
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
