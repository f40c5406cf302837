// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Error objects for the JSON-RPC 2.0 surface.
//!
//! Protocol failures are reported to the client as values of
//! [`JsonRpcError`]; they never surface as Rust errors or broken connections.
//! See the [error object section](https://www.jsonrpc.org/specification#error_object).

use serde::{Deserialize, Serialize};

/// Standard JSON-RPC 2.0 error codes used by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Parse error (-32700)
    /// Invalid JSON was received by the server.
    ParseError = -32700,

    /// Invalid Request (-32600)
    /// The JSON sent is not a valid Request object.
    InvalidRequest = -32600,

    /// Method not found (-32601)
    /// The method does not exist / is not available.
    MethodNotFound = -32601,

    /// Invalid params (-32602)
    /// Invalid method parameter(s).
    InvalidParams = -32602,

    /// Internal error (-32603)
    /// Internal JSON-RPC error.
    InternalError = -32603,
}

impl ErrorCode {
    /// Returns a string description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "Parse error",
            ErrorCode::InvalidRequest => "Invalid Request",
            ErrorCode::MethodNotFound => "Method not found",
            ErrorCode::InvalidParams => "Invalid params",
            ErrorCode::InternalError => "Internal error",
        }
    }

    /// Returns the integer error code.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> i32 {
        code as i32
    }
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// The error code
    pub code: i32,

    /// A short description of the error
    pub message: String,

    /// Additional information about the error (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    /// Creates a new JSON-RPC error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    fn described(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::new(code, format!("{}: {}", code.description(), detail.into()))
    }

    /// Creates a parse error.
    pub fn parse_error<S: Into<String>>(msg: S) -> Self {
        Self::described(ErrorCode::ParseError, msg)
    }

    /// Creates an invalid request error.
    pub fn invalid_request<S: Into<String>>(msg: S) -> Self {
        Self::described(ErrorCode::InvalidRequest, msg)
    }

    /// Creates a method not found error.
    pub fn method_not_found<S: Into<String>>(method: S) -> Self {
        Self::described(ErrorCode::MethodNotFound, method)
    }

    /// Creates an invalid params error.
    pub fn invalid_params<S: Into<String>>(msg: S) -> Self {
        Self::described(ErrorCode::InvalidParams, msg)
    }

    /// Creates an internal error.
    pub fn internal_error<S: Into<String>>(msg: S) -> Self {
        Self::described(ErrorCode::InternalError, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::ParseError.code(), -32700);
        assert_eq!(ErrorCode::InvalidRequest.code(), -32600);
        assert_eq!(ErrorCode::MethodNotFound.code(), -32601);
        assert_eq!(ErrorCode::InvalidParams.code(), -32602);
        assert_eq!(i32::from(ErrorCode::InternalError), -32603);
    }

    #[test]
    fn test_constructors_prefix_description() {
        let error = JsonRpcError::method_not_found("resources/list");
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Method not found: resources/list");

        let error = JsonRpcError::invalid_params("trace_id required");
        assert_eq!(error.code, -32602);
        assert!(error.message.ends_with("trace_id required"));
    }

    #[test]
    fn test_data_is_omitted_when_absent() {
        let json = serde_json::to_string(&JsonRpcError::parse_error("invalid JSON")).unwrap();
        assert_eq!(json, r#"{"code":-32700,"message":"Parse error: invalid JSON"}"#);
    }
}
