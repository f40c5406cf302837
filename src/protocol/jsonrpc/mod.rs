// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! JSON-RPC 2.0 surface of the gateway.
//!
//! Implements the subset of the [JSON-RPC 2.0 specification](https://www.jsonrpc.org/specification)
//! that MCP tool callers need: single request objects, `tools/list` and
//! `tools/call`, and the standard error codes.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use telemetry_gateway_lib::protocol::jsonrpc::create_handler;
//! use telemetry_gateway_lib::query::QueryExecutor;
//! use telemetry_gateway_lib::store::InMemoryStore;
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let handler = create_handler(QueryExecutor::new(Arc::new(InMemoryStore::new())));
//!
//! let response = runtime.block_on(handler.handle_request_str(
//!     r#"{"jsonrpc": "2.0", "method": "tools/call", "params": {"name": "get_trace", "arguments": {"trace_id": "T1"}}, "id": 1}"#,
//! ));
//!
//! assert!(response.contains("trace not found"));
//! assert!(response.contains(r#""id":1"#));
//! ```

pub mod error;
pub mod handler;
pub mod methods;
pub mod setup;
pub mod types;
pub mod validation;

// Re-exports
pub use error::{ErrorCode, JsonRpcError};
pub use handler::{JsonRpcHandler, MethodContext, MethodResult};
pub use setup::{create_handler, register_standard_methods};
pub use types::{Id, Request, Response, JSONRPC_VERSION};
pub use validation::{validate_request, Rejection};

#[cfg(test)]
mod tests;
