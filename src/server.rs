// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! HTTP server hosting the JSON-RPC and REST surfaces.
//!
//! Both surfaces share one listener. The server starts at most once and is
//! stopped with a deadline: after the shutdown signal, in-flight requests get
//! until the deadline to finish before the serving task is aborted.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::{ServerConfig, Validate};
use crate::error::transport::TransportError;
use crate::error::GatewayResult;
use crate::protocol::jsonrpc::{create_handler, JsonRpcHandler, Response};
use crate::protocol::rest::{self, HEALTHZ_PATH, LOGS_PREFIX, TRACES_PREFIX};
use crate::query::QueryExecutor;
use crate::store::TelemetryStore;

/// State shared by every request handler.
#[derive(Clone)]
pub struct GatewayState {
    /// Executor behind both surfaces
    pub executor: QueryExecutor,
    /// JSON-RPC dispatcher
    pub rpc: Arc<JsonRpcHandler>,
}

impl GatewayState {
    /// Builds the state, registering the standard methods over `executor`.
    pub fn new(executor: QueryExecutor) -> Self {
        let rpc = Arc::new(create_handler(executor.clone()));
        Self { executor, rpc }
    }
}

async fn rpc_endpoint(State(state): State<GatewayState>, body: Bytes) -> Json<Response> {
    Json(state.rpc.handle_request(&body).await)
}

/// Builds the router for both surfaces.
///
/// Wildcards do not match an empty remainder, so each lookup also has a route
/// on its bare prefix for the empty id.
pub fn build_router(config: &ServerConfig, state: GatewayState) -> Router {
    Router::new()
        .route(&config.rpc_path, post(rpc_endpoint))
        .route(HEALTHZ_PATH, get(rest::healthz))
        .route(TRACES_PREFIX, get(rest::blank_trace_spans))
        .route(&format!("{TRACES_PREFIX}{{*trace_id}}"), get(rest::trace_spans))
        .route(LOGS_PREFIX, get(rest::blank_trace_logs))
        .route(&format!("{LOGS_PREFIX}{{*trace_id}}"), get(rest::trace_logs))
        .layer(DefaultBodyLimit::max(config.max_request_bytes))
        .with_state(state)
}

struct RunningServer {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

/// The gateway's HTTP server.
pub struct GatewayServer {
    config: ServerConfig,
    state: GatewayState,
    running: Option<RunningServer>,
}

impl GatewayServer {
    /// Creates a server over `store`. Nothing is bound until [`start`](Self::start).
    pub fn new(config: ServerConfig, store: Arc<dyn TelemetryStore>) -> Self {
        Self {
            config,
            state: GatewayState::new(QueryExecutor::new(store)),
            running: None,
        }
    }

    /// Binds the configured address and starts serving in a background task.
    ///
    /// Succeeds without binding when no address is configured.
    pub async fn start(&mut self) -> GatewayResult<()> {
        if self.running.is_some() {
            return Err(TransportError::AlreadyStarted.into());
        }
        let Some(address) = self.config.bind_address() else {
            info!(server = %self.config.name, "No listen address configured, server disabled");
            return Ok(());
        };
        self.config.validate()?;

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| TransportError::Bind {
                address: address.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(TransportError::Serve)?;

        let app = build_router(&self.config, self.state.clone());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!(
            server = %self.config.name,
            address = %local_addr,
            rpc_path = %self.config.rpc_path,
            "Telemetry gateway listening"
        );
        self.running = Some(RunningServer {
            local_addr,
            shutdown_tx,
            task,
        });
        Ok(())
    }

    /// Address actually bound, once started.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.running.as_ref().map(|running| running.local_addr)
    }

    /// Stops accepting connections and waits up to `deadline` for in-flight
    /// requests. A server that never started shuts down trivially.
    pub async fn shutdown(&mut self, deadline: Duration) -> GatewayResult<()> {
        let Some(running) = self.running.take() else {
            debug!("Shutdown requested for a server that is not running");
            return Ok(());
        };
        info!(address = %running.local_addr, ?deadline, "Shutting down telemetry gateway");

        let RunningServer {
            shutdown_tx,
            mut task,
            ..
        } = running;
        let _ = shutdown_tx.send(());

        match tokio::time::timeout(deadline, &mut task).await {
            Ok(Ok(Ok(()))) => {
                info!("Telemetry gateway stopped");
                Ok(())
            }
            Ok(Ok(Err(e))) => Err(TransportError::Serve(e).into()),
            Ok(Err(e)) => Err(TransportError::Task(e.to_string()).into()),
            Err(_) => {
                warn!(?deadline, "In-flight requests outlived the shutdown deadline");
                task.abort();
                Err(TransportError::ShutdownTimeout(deadline).into())
            }
        }
    }
}

impl Drop for GatewayServer {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            running.task.abort();
        }
    }
}
