// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Protocol surfaces of the gateway.
//!
//! Both surfaces share the same [`QueryExecutor`](crate::query::QueryExecutor):
//! - [`jsonrpc`]: JSON-RPC 2.0 `tools/list` and `tools/call` over the [`catalog`]
//! - [`rest`]: `GET /traces/{id}`, `GET /logs/{id}` and `GET /healthz`

pub mod catalog;
pub mod jsonrpc;
pub mod rest;
