// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Store configuration module.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration of the in-memory telemetry store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON snapshot of spans and logs loaded at startup
    pub snapshot_file: Option<PathBuf>,

    /// Substring a log body must contain to be listed by `list_logs`
    pub log_filter: Option<String>,
}

impl Validate for StoreConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.snapshot_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "snapshot_file cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
