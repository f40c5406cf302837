// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Crate-level tests and shared fixtures.
//!
//! Component tests live next to their code; this module holds the tests that
//! cut across components and the [`test_utils`] fixtures they all use.

pub mod error_tests;
pub mod test_utils;
