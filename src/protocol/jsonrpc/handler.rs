// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! JSON-RPC 2.0 handler implementation.
//!
//! This module provides the dispatcher for JSON-RPC 2.0 requests: method
//! registration, envelope validation, dispatch and response building.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::JsonRpcError;
use super::types::{Id, Response};
use super::validation::validate_request;

/// Per-request information handed to method handlers.
#[derive(Debug, Clone)]
pub struct MethodContext {
    /// Id of the request being served, for logging
    pub request_id: Id,
}

impl Default for MethodContext {
    fn default() -> Self {
        Self {
            request_id: Id::Null,
        }
    }
}

/// Type alias for method handler response.
pub type MethodResult = std::result::Result<Value, JsonRpcError>;

/// Type alias for method handler's future return type.
pub type MethodHandlerFuture = BoxFuture<'static, MethodResult>;

/// Type alias for shared method handlers.
pub type MethodHandlerFn = Arc<dyn MethodHandler + Send + Sync>;

/// Trait for method handlers to implement.
pub trait MethodHandler {
    /// Handle a method call asynchronously.
    ///
    /// # Parameters
    /// * `params` - The parameters passed to the method.
    /// * `context` - Additional context for the method call.
    fn handle(&self, params: Option<Value>, context: MethodContext) -> MethodHandlerFuture;
}

// Implement MethodHandler for async functions
impl<F, Fut> MethodHandler for F
where
    F: Send + Sync + 'static + Fn(Option<Value>, MethodContext) -> Fut,
    Fut: Future<Output = MethodResult> + Send + 'static,
{
    fn handle(&self, params: Option<Value>, context: MethodContext) -> MethodHandlerFuture {
        Box::pin((self)(params, context))
    }
}

/// Handler for JSON-RPC 2.0 requests.
///
/// Methods are registered once while the server is assembled; afterwards the
/// handler is only read, so it can be shared between connections behind an
/// `Arc` without locking. Every call to [`JsonRpcHandler::handle_request`]
/// produces exactly one [`Response`].
#[derive(Default)]
pub struct JsonRpcHandler {
    methods: HashMap<String, MethodHandlerFn>,
}

impl std::fmt::Debug for JsonRpcHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcHandler")
            .field("methods", &self.method_names())
            .finish()
    }
}

impl JsonRpcHandler {
    /// Creates a new JSON-RPC handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a method handler function.
    pub fn register_method<F, Fut>(&mut self, method: impl Into<String>, handler: F)
    where
        F: Send + Sync + 'static + Fn(Option<Value>, MethodContext) -> Fut,
        Fut: Future<Output = MethodResult> + Send + 'static,
    {
        self.methods
            .insert(method.into(), Arc::new(handler) as MethodHandlerFn);
    }

    /// Registered method names, sorted.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Handles a raw JSON-RPC request body.
    ///
    /// Validation failures, unknown methods and handler errors all become
    /// error responses; this never fails.
    pub async fn handle_request(&self, body: &[u8]) -> Response {
        let request = match validate_request(body) {
            Ok(request) => request,
            Err(rejection) => {
                debug!(
                    code = rejection.error.code,
                    message = %rejection.error.message,
                    "Rejected JSON-RPC request"
                );
                return Response::error(rejection.id, rejection.error);
            }
        };

        let id = request.response_id();
        let Some(handler) = self.methods.get(&request.method) else {
            debug!(method = %request.method, id = %id, "Unknown JSON-RPC method");
            return Response::error(id, JsonRpcError::method_not_found(request.method));
        };

        debug!(method = %request.method, id = %id, "Dispatching JSON-RPC request");
        let context = MethodContext {
            request_id: id.clone(),
        };
        match handler.handle(request.params, context).await {
            Ok(result) => Response::success(id, result),
            Err(error) => {
                if error.code == super::ErrorCode::InternalError.code() {
                    warn!(method = %request.method, message = %error.message, "JSON-RPC method failed");
                }
                Response::error(id, error)
            }
        }
    }

    /// Handles a request body and serializes the response.
    pub async fn handle_request_str(&self, body: impl AsRef<str>) -> String {
        let response = self.handle_request(body.as_ref().as_bytes()).await;
        serde_json::to_string(&response).unwrap_or_else(|_| {
            r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"Internal error: Error serializing response"}}"#.to_string()
        })
    }
}
