// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! REST lookups returning structured JSON projections.
//!
//! The trace id is the percent-decoded remainder of the path after the route
//! prefix. Slashes inside it are kept, and the bare prefix looks up the empty
//! id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use crate::query::render::{log_projections, span_projections};
use crate::server::GatewayState;

/// Path prefix of the span lookup.
pub const TRACES_PREFIX: &str = "/traces/";

/// Path prefix of the log lookup.
pub const LOGS_PREFIX: &str = "/logs/";

/// Path of the liveness probe.
pub const HEALTHZ_PATH: &str = "/healthz";

/// Liveness probe.
pub async fn healthz() -> &'static str {
    "ok"
}

/// `GET /traces/{id}`: the spans of one trace, ordered by start time.
pub async fn trace_spans(
    State(state): State<GatewayState>,
    Path(trace_id): Path<String>,
) -> Response {
    spans_response(&state, &trace_id)
}

/// `GET /traces/`: the spans recorded under the empty trace id.
pub async fn blank_trace_spans(State(state): State<GatewayState>) -> Response {
    spans_response(&state, "")
}

/// `GET /logs/{id}`: the logs correlated with one trace, ordered by timestamp.
pub async fn trace_logs(
    State(state): State<GatewayState>,
    Path(trace_id): Path<String>,
) -> Response {
    logs_response(&state, &trace_id)
}

/// `GET /logs/`: the logs recorded under the empty trace id.
pub async fn blank_trace_logs(State(state): State<GatewayState>) -> Response {
    logs_response(&state, "")
}

fn spans_response(state: &GatewayState, trace_id: &str) -> Response {
    debug!(trace_id, "REST span lookup");
    match state.executor.get_trace(trace_id) {
        Some(spans) => Json(span_projections(&spans)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn logs_response(state: &GatewayState, trace_id: &str) -> Response {
    debug!(trace_id, "REST log lookup");
    match state.executor.get_logs_for_trace(trace_id) {
        Some(logs) => Json(log_projections(&logs)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
