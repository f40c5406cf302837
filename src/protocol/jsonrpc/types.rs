// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Types for the JSON-RPC 2.0 protocol.
//!
//! This module defines the request and response envelopes according to the
//! [specification](https://www.jsonrpc.org/specification).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::JsonRpcError;

/// The only protocol version the gateway accepts.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC request identifier.
///
/// Never interpreted, only echoed. Numbers keep their original representation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier
    String(String),

    /// Numeric identifier
    Number(serde_json::Number),

    /// Null identifier, also used when the request carried no id
    Null,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "{}", s),
            Id::Number(n) => write!(f, "{}", n),
            Id::Null => write!(f, "null"),
        }
    }
}

/// A decoded JSON-RPC 2.0 request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request {
    /// JSON-RPC protocol version, always "2.0"
    pub jsonrpc: String,

    /// Name of the method to be invoked
    pub method: String,

    /// Method parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,

    /// Request identifier, `None` when the client sent none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

impl Request {
    /// Creates a new JSON-RPC 2.0 request.
    pub fn new(method: impl Into<String>, params: Option<serde_json::Value>, id: Option<Id>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }

    /// The id to echo in the response.
    pub fn response_id(&self) -> Id {
        self.id.clone().unwrap_or(Id::Null)
    }
}

/// A JSON-RPC 2.0 response object. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Response {
    /// JSON-RPC protocol version, always "2.0"
    pub jsonrpc: String,

    /// Same identifier as the request this is responding to
    pub id: Id,

    /// The result of the method invocation, if successful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// The error object, if an error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl Response {
    /// Creates a new successful JSON-RPC 2.0 response.
    pub fn success(id: Id, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Creates a new error JSON-RPC 2.0 response.
    pub fn error(id: Id, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    /// Returns true if this response contains a successful result.
    pub fn is_success(&self) -> bool {
        self.result.is_some() && self.error.is_none()
    }

    /// Returns true if this response contains an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::jsonrpc::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_response_serialization() {
        let success = Response::success(Id::Number(1.into()), json!({"tools": []}));
        let json_str = serde_json::to_string(&success).unwrap();
        assert_eq!(json_str, r#"{"jsonrpc":"2.0","id":1,"result":{"tools":[]}}"#);

        let error = Response::error(
            Id::String("abc".to_string()),
            JsonRpcError::new(ErrorCode::MethodNotFound, "method not found"),
        );
        let json_str = serde_json::to_string(&error).unwrap();
        assert_eq!(
            json_str,
            r#"{"jsonrpc":"2.0","id":"abc","error":{"code":-32601,"message":"method not found"}}"#
        );
    }

    #[test]
    fn test_null_id_is_serialized() {
        let response = Response::error(Id::Null, JsonRpcError::parse_error("invalid JSON"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], json!(null));
    }

    #[test]
    fn test_id_keeps_number_representation() {
        let id: Id = serde_json::from_str("7.5").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7.5");

        let id: Id = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(id.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_response_id_defaults_to_null() {
        let request = Request::new("tools/list", None, None);
        assert_eq!(request.response_id(), Id::Null);
    }
}
