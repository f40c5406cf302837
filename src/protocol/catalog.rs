// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! The fixed tool catalog.
//!
//! Descriptors are built once per process and serve both `tools/list` and the
//! validation of `tools/call` arguments. A validated call becomes a typed
//! [`ToolCall`]; nothing past this module looks at raw argument maps again.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::protocol::jsonrpc::error::JsonRpcError;
use crate::query::DEFAULT_LIMIT;

/// Name of the tool listing recent spans.
pub const LIST_TRACES: &str = "list_traces";
/// Name of the tool returning the spans of one trace.
pub const GET_TRACE: &str = "get_trace";
/// Name of the tool listing recent logs.
pub const LIST_LOGS: &str = "list_logs";
/// Name of the tool returning the logs of one trace.
pub const GET_LOGS_FOR_TRACE: &str = "get_logs_for_trace";

/// A tool that clients can discover and call.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Unique tool name
    pub name: &'static str,

    /// Short human-readable description
    pub description: &'static str,

    /// JSON Schema of the `arguments` object
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDescriptor {
    fn new(name: &'static str, description: &'static str, input_schema: Value) -> Self {
        Self {
            name,
            description,
            input_schema,
        }
    }

    /// Checks that every required property is present with its declared type.
    ///
    /// Optional properties are not checked here; a mistyped optional argument
    /// falls back to its default when the call is built.
    pub fn validate_arguments(&self, arguments: &Map<String, Value>) -> Result<(), String> {
        let required = self.input_schema["required"]
            .as_array()
            .map(Vec::as_slice)
            .unwrap_or_default();

        for key in required.iter().filter_map(Value::as_str) {
            let expected = self.input_schema["properties"][key]["type"]
                .as_str()
                .unwrap_or("string");
            match arguments.get(key) {
                Some(value) if json_type_matches(value, expected) => {}
                Some(_) => return Err(format!("{key} must be of type {expected}")),
                None => return Err(format!("{key} required")),
            }
        }
        Ok(())
    }
}

fn json_type_matches(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "integer" | "number" => value.is_number(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        _ => true,
    }
}

static CATALOG: Lazy<Vec<ToolDescriptor>> = Lazy::new(|| {
    vec![
        ToolDescriptor::new(
            LIST_TRACES,
            "List recent trace IDs and services",
            json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "maximum number of traces to return"
                    }
                }
            }),
        ),
        ToolDescriptor::new(
            GET_TRACE,
            "Get spans for a trace ID",
            json!({
                "type": "object",
                "properties": {
                    "trace_id": { "type": "string" }
                },
                "required": ["trace_id"]
            }),
        ),
        ToolDescriptor::new(
            LIST_LOGS,
            "List recent log records",
            json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "maximum number of logs to return"
                    }
                }
            }),
        ),
        ToolDescriptor::new(
            GET_LOGS_FOR_TRACE,
            "Get logs associated with a trace ID",
            json!({
                "type": "object",
                "properties": {
                    "trace_id": { "type": "string" }
                },
                "required": ["trace_id"]
            }),
        ),
    ]
});

/// Every tool, in catalog order.
pub fn tools() -> &'static [ToolDescriptor] {
    &CATALOG
}

/// Looks up a tool by name.
pub fn find(name: &str) -> Option<&'static ToolDescriptor> {
    CATALOG.iter().find(|tool| tool.name == name)
}

/// A validated tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    /// `list_traces`
    ListTraces {
        /// Window size; non-positive means everything
        limit: i64,
    },
    /// `get_trace`
    GetTrace {
        /// Trace to look up
        trace_id: String,
    },
    /// `list_logs`
    ListLogs {
        /// Window size; non-positive means everything
        limit: i64,
    },
    /// `get_logs_for_trace`
    GetLogsForTrace {
        /// Trace to look up
        trace_id: String,
    },
}

impl ToolCall {
    /// Validates `arguments` against the named tool and builds the typed call.
    ///
    /// Unknown tools map to "method not found", bad arguments to "invalid params".
    pub fn from_arguments(
        name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<Self, JsonRpcError> {
        let tool = find(name)
            .ok_or_else(|| JsonRpcError::method_not_found(format!("unknown tool {name}")))?;
        tool.validate_arguments(arguments)
            .map_err(JsonRpcError::invalid_params)?;

        let call = match tool.name {
            LIST_TRACES => Self::ListTraces {
                limit: limit_argument(arguments),
            },
            GET_TRACE => Self::GetTrace {
                trace_id: string_argument(arguments, "trace_id"),
            },
            LIST_LOGS => Self::ListLogs {
                limit: limit_argument(arguments),
            },
            GET_LOGS_FOR_TRACE => Self::GetLogsForTrace {
                trace_id: string_argument(arguments, "trace_id"),
            },
            other => {
                return Err(JsonRpcError::method_not_found(format!(
                    "tool {other} has no call mapping"
                )))
            }
        };
        Ok(call)
    }
}

/// Reads `limit`, truncating floats toward zero; anything else yields the default.
fn limit_argument(arguments: &Map<String, Value>) -> i64 {
    match arguments.get("limit") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(DEFAULT_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

fn string_argument(arguments: &Map<String, Value>, key: &str) -> String {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
