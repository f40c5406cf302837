// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Server configuration module.
//!
//! Listen address, JSON-RPC path, worker threads and shutdown behaviour of the
//! HTTP server that carries both protocol surfaces.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Paths owned by the REST surface; the JSON-RPC path may not shadow them.
const RESERVED_PATHS: [&str; 3] = ["/healthz", "/traces/", "/logs/"];

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name of the server (used in logs)
    pub name: String,

    /// Address to listen on. The server stays off when unset or empty.
    pub listen_address: Option<String>,

    /// Path accepting JSON-RPC POST requests
    pub rpc_path: String,

    /// Number of runtime worker threads
    pub worker_threads: usize,

    /// Deadline for in-flight requests during shutdown, in milliseconds
    pub shutdown_timeout_ms: u64,

    /// Maximum accepted request body size in bytes
    pub max_request_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "telemetry-gateway".to_string(),
            listen_address: None,
            rpc_path: "/".to_string(),
            worker_threads: num_cpus::get(),
            shutdown_timeout_ms: 5000,
            max_request_bytes: 1024 * 1024, // 1 MiB
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind, or `None` when the server is disabled.
    ///
    /// A port-only address such as `:4319` binds all interfaces.
    pub fn bind_address(&self) -> Option<String> {
        let address = self.listen_address.as_deref()?.trim();
        if address.is_empty() {
            return None;
        }
        if address.starts_with(':') {
            return Some(format!("0.0.0.0{address}"));
        }
        Some(address.to_string())
    }

    /// Shutdown deadline as a [`Duration`].
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server name cannot be empty".to_string(),
            ));
        }

        if !self.rpc_path.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "rpc_path must start with '/': {}",
                self.rpc_path
            )));
        }

        if self.rpc_path.contains(['{', '}', '*'])
            || RESERVED_PATHS
                .iter()
                .any(|reserved| self.rpc_path.starts_with(reserved))
        {
            return Err(ConfigError::ValidationError(format!(
                "rpc_path collides with a REST route: {}",
                self.rpc_path
            )));
        }

        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        if self.shutdown_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "shutdown_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.max_request_bytes < 1024 {
            return Err(ConfigError::ValueOutOfRange {
                key: "server.max_request_bytes".to_string(),
                message: "must be at least 1024".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_disabled_when_unset_or_empty() {
        let mut config = ServerConfig::default();
        assert_eq!(config.bind_address(), None);

        config.listen_address = Some("   ".to_string());
        assert_eq!(config.bind_address(), None);
    }

    #[test]
    fn test_bind_address_port_only() {
        let config = ServerConfig {
            listen_address: Some(":4319".to_string()),
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_address().as_deref(), Some("0.0.0.0:4319"));
    }

    #[test]
    fn test_rpc_path_must_not_shadow_rest_routes() {
        for path in ["/healthz", "/traces/x", "/logs/", "mcp", "/{id}"] {
            let config = ServerConfig {
                rpc_path: path.to_string(),
                ..ServerConfig::default()
            };
            assert!(config.validate().is_err(), "{path} should be rejected");
        }

        let config = ServerConfig {
            rpc_path: "/mcp".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
