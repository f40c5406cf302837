// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Envelope validation for incoming JSON-RPC requests.
//!
//! Decoding happens in stages so that each failure maps to the right error
//! code, and so that a rejection can still echo the request id whenever the
//! id itself was readable.

use serde_json::{Map, Value};

use super::error::JsonRpcError;
use super::types::{Id, Request, JSONRPC_VERSION};

/// A request that was refused before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Id to echo, `Null` when it could not be decoded
    pub id: Id,

    /// Error to report
    pub error: JsonRpcError,
}

impl Rejection {
    fn new(id: Id, error: JsonRpcError) -> Self {
        Self { id, error }
    }
}

/// Decodes and validates a JSON-RPC 2.0 request body.
///
/// Performs the following checks, in order:
/// - The body is valid JSON (`-32700`)
/// - It is a single request object; batches are not accepted (`-32600`)
/// - The id, if present, is a string, number or null (`-32600`)
/// - `jsonrpc` is exactly `"2.0"` (`-32600`, id echoed)
/// - `method` is a string (`-32600`, id echoed)
pub fn validate_request(body: &[u8]) -> Result<Request, Rejection> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| Rejection::new(Id::Null, JsonRpcError::parse_error(e.to_string())))?;

    let Value::Object(mut object) = json else {
        return Err(Rejection::new(
            Id::Null,
            JsonRpcError::invalid_request("request must be a single JSON object"),
        ));
    };

    let id = decode_id(&mut object)?;
    let echo = id.clone().unwrap_or(Id::Null);

    match object.get("jsonrpc") {
        Some(Value::String(version)) if version == JSONRPC_VERSION => {}
        _ => {
            return Err(Rejection::new(
                echo,
                JsonRpcError::invalid_request("invalid JSON-RPC version"),
            ))
        }
    }

    let method = match object.remove("method") {
        Some(Value::String(method)) => method,
        _ => {
            return Err(Rejection::new(
                echo,
                JsonRpcError::invalid_request("method must be a string"),
            ))
        }
    };

    Ok(Request::new(method, object.remove("params"), id))
}

fn decode_id(object: &mut Map<String, Value>) -> Result<Option<Id>, Rejection> {
    match object.remove("id") {
        None => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some).map_err(|_| {
            Rejection::new(
                Id::Null,
                JsonRpcError::invalid_request("id must be a string, number or null"),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::jsonrpc::error::ErrorCode;
    use serde_json::json;

    fn reject(body: &str) -> Rejection {
        validate_request(body.as_bytes()).unwrap_err()
    }

    #[test]
    fn test_validate_valid_request() {
        let request = validate_request(
            br#"{"jsonrpc": "2.0", "method": "tools/call", "params": {"name": "list_traces"}, "id": 1}"#,
        )
        .unwrap();
        assert_eq!(request.method, "tools/call");
        assert_eq!(request.id, Some(Id::Number(1.into())));
        assert_eq!(request.params, Some(json!({"name": "list_traces"})));
    }

    #[test]
    fn test_missing_id_is_accepted() {
        let request = validate_request(br#"{"jsonrpc": "2.0", "method": "tools/list"}"#).unwrap();
        assert_eq!(request.id, None);
        assert_eq!(request.response_id(), Id::Null);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let rejection = reject(r#"{"jsonrpc": "2.0", "method": "tools/list", "id": 1"#);
        assert_eq!(rejection.error.code, ErrorCode::ParseError.code());
        assert_eq!(rejection.id, Id::Null);
    }

    #[test]
    fn test_wrong_version_echoes_id() {
        let rejection = reject(r#"{"jsonrpc": "1.0", "method": "tools/list", "id": "req-7"}"#);
        assert_eq!(rejection.error.code, ErrorCode::InvalidRequest.code());
        assert_eq!(rejection.id, Id::String("req-7".to_string()));

        let rejection = reject(r#"{"method": "tools/list", "id": 3}"#);
        assert_eq!(rejection.error.code, ErrorCode::InvalidRequest.code());
        assert_eq!(rejection.id, Id::Number(3.into()));
    }

    #[test]
    fn test_non_object_requests_are_invalid() {
        for body in ["[]", r#"[{"jsonrpc": "2.0", "method": "tools/list", "id": 1}]"#, "42", "null"] {
            let rejection = reject(body);
            assert_eq!(rejection.error.code, ErrorCode::InvalidRequest.code(), "{body}");
            assert_eq!(rejection.id, Id::Null);
        }
    }

    #[test]
    fn test_structured_id_is_invalid() {
        let rejection = reject(r#"{"jsonrpc": "2.0", "method": "tools/list", "id": {"a": 1}}"#);
        assert_eq!(rejection.error.code, ErrorCode::InvalidRequest.code());
        assert_eq!(rejection.id, Id::Null);
    }

    #[test]
    fn test_method_must_be_string() {
        let rejection = reject(r#"{"jsonrpc": "2.0", "method": 5, "id": 9}"#);
        assert_eq!(rejection.error.code, ErrorCode::InvalidRequest.code());
        assert_eq!(rejection.id, Id::Number(9.into()));
    }
}
