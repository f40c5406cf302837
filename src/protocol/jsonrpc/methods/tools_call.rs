// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Implementation of the JSON-RPC "tools/call" method handler.
//!
//! Parameters are validated against the catalog once, here, and turned into a
//! [`ToolCall`]. The query result is rendered as a single text block.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::protocol::catalog::ToolCall;
use crate::protocol::jsonrpc::error::JsonRpcError;
use crate::protocol::jsonrpc::handler::{JsonRpcHandler, MethodContext, MethodResult};
use crate::query::render::{self, LOGS_NOT_FOUND, TRACE_NOT_FOUND};
use crate::query::QueryExecutor;

/// Method name.
pub const METHOD: &str = "tools/call";

/// Request parameters for the tools/call method.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Tool to invoke
    pub name: String,

    /// Tool arguments; absent or null means none
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}

/// A text item of a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// Always `"text"`
    #[serde(rename = "type")]
    pub content_type: String,

    /// The rendered text
    pub text: String,
}

/// Result of a tools/call invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    /// Result items
    pub content: Vec<TextContent>,
}

impl ToolResult {
    /// A successful result carrying one text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent {
                content_type: "text".to_string(),
                text: text.into(),
            }],
        }
    }
}

/// Registers the tools/call method handler, bound to `executor`.
pub fn register_tools_call_method(handler: &mut JsonRpcHandler, executor: QueryExecutor) {
    handler.register_method(METHOD, move |params, context| {
        let executor = executor.clone();
        async move { handle_tools_call(executor, params, context).await }
    });
}

/// Handles the tools/call method call.
async fn handle_tools_call(
    executor: QueryExecutor,
    params: Option<Value>,
    context: MethodContext,
) -> MethodResult {
    let params = params.ok_or_else(|| JsonRpcError::invalid_params("missing params"))?;
    let params: ToolCallParams = serde_json::from_value(params)
        .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;
    let arguments = params.arguments.unwrap_or_default();

    let call = ToolCall::from_arguments(&params.name, &arguments)?;
    debug!(id = %context.request_id, tool = %params.name, "Calling tool");

    let result = ToolResult::text(run_tool(&executor, call));
    serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

/// Executes a validated call and renders its text.
pub fn run_tool(executor: &QueryExecutor, call: ToolCall) -> String {
    match call {
        ToolCall::ListTraces { limit } => render::trace_list_text(&executor.list_traces(limit)),
        ToolCall::GetTrace { trace_id } => executor
            .get_trace(&trace_id)
            .map_or_else(|| TRACE_NOT_FOUND.to_string(), |spans| render::trace_text(&spans)),
        ToolCall::ListLogs { limit } => render::log_list_text(&executor.list_logs(limit)),
        ToolCall::GetLogsForTrace { trace_id } => executor
            .get_logs_for_trace(&trace_id)
            .map_or_else(|| LOGS_NOT_FOUND.to_string(), |logs| render::trace_logs_text(&logs)),
    }
}
