// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! JSON-RPC 2.0 method handlers.
//!
//! The gateway exposes exactly two methods: `tools/list` and `tools/call`.

pub mod tools_call;
pub mod tools_list;

// Re-exports
pub use tools_call::register_tools_call_method;
pub use tools_list::register_tools_list_method;
