// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Implementation of the JSON-RPC "tools/list" method handler.
//!
//! Returns the whole tool catalog, unfiltered and in catalog order. Any
//! parameters are ignored.

use serde::Serialize;
use serde_json::Value;

use crate::protocol::catalog::{self, ToolDescriptor};
use crate::protocol::jsonrpc::error::JsonRpcError;
use crate::protocol::jsonrpc::handler::{JsonRpcHandler, MethodContext, MethodResult};

/// Method name.
pub const METHOD: &str = "tools/list";

/// Response for the tools/list method.
#[derive(Debug, Clone, Serialize)]
pub struct ToolsListResult {
    /// List of available tools
    pub tools: &'static [ToolDescriptor],
}

/// Registers the tools/list method handler with the JSON-RPC handler.
pub fn register_tools_list_method(handler: &mut JsonRpcHandler) {
    handler.register_method(METHOD, handle_tools_list);
}

/// Handles the tools/list method call.
async fn handle_tools_list(_params: Option<Value>, _context: MethodContext) -> MethodResult {
    let result = ToolsListResult {
        tools: catalog::tools(),
    };
    serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
