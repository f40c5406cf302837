// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! End-to-end tests of the JSON-RPC surface over an in-memory store.
