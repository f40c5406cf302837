// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Setup and initialization utilities for the JSON-RPC handler.

use crate::protocol::jsonrpc::handler::JsonRpcHandler;
use crate::protocol::jsonrpc::methods::{register_tools_call_method, register_tools_list_method};
use crate::query::QueryExecutor;

/// Registers `tools/list` and `tools/call` with the JSON-RPC handler.
pub fn register_standard_methods(handler: &mut JsonRpcHandler, executor: QueryExecutor) {
    register_tools_list_method(handler);
    register_tools_call_method(handler, executor);
}

/// Creates a JSON-RPC handler serving the tool catalog over `executor`.
pub fn create_handler(executor: QueryExecutor) -> JsonRpcHandler {
    let mut handler = JsonRpcHandler::new();
    register_standard_methods(&mut handler, executor);
    handler
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_only_tool_methods_are_registered() {
        let handler = create_handler(QueryExecutor::new(Arc::new(InMemoryStore::new())));
        assert_eq!(handler.method_names(), ["tools/call", "tools/list"]);
    }
}
