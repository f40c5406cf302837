// Copyright (c) 2025 Telemetry Gateway Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Telemetry Gateway - Main entrypoint.
//!
//! Loads configuration, initializes logging, seeds the in-memory store and
//! runs the gateway server until Ctrl-C.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use telemetry_gateway_lib::config::{ConfigLoader, GatewayConfig, LogConfig, ENV_PREFIX};
use telemetry_gateway_lib::error::{
    ErrorContext, ErrorReporter, GatewayError, GatewayResult, TracingErrorReporter,
};
use telemetry_gateway_lib::server::GatewayServer;
use telemetry_gateway_lib::store::InMemoryStore;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

/// Command line arguments for the telemetry gateway.
#[derive(Parser, Debug)]
#[clap(name = "Telemetry Gateway", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the server
    Start,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> GatewayResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .map_err(|e| GatewayError::Custom(format!("Invalid log filter: {e}")))?;

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if log.json {
        fmt::layer()
            .json()
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .boxed()
    } else {
        fmt::layer()
            .pretty()
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .with_thread_names(true)
            .boxed()
    };

    Registry::default()
        .with(fmt_layer)
        .with(filter)
        .with(tracing_error::ErrorLayer::default())
        .try_init()
        .map_err(|e| GatewayError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Runs the server until Ctrl-C, then shuts it down within the configured deadline.
fn start(config: GatewayConfig) -> GatewayResult<()> {
    let store = Arc::new(InMemoryStore::from_config(&config.store)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.worker_threads)
        .thread_name("telemetry-gateway")
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let deadline = config.server.shutdown_timeout();
        let mut server = GatewayServer::new(config.server, store);
        server.start().await?;

        if server.local_addr().is_none() {
            warn!("Nothing to serve without server.listen_address, exiting");
            return Ok(());
        }

        tokio::signal::ctrl_c().await?;
        info!("Received Ctrl-C");
        server.shutdown(deadline).await
    })
}

fn run(args: Args) -> GatewayResult<()> {
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Start) {
        Command::Start => {
            let config = config_loader.load();
            init_logging(config.as_ref().map(|c| &c.log).unwrap_or(&LogConfig::default()))?;
            let config = config?;

            info!(
                version = telemetry_gateway_lib::VERSION,
                server = %config.server.name,
                "Starting telemetry gateway"
            );
            start(config)
        }
        Command::Validate => {
            init_logging(&LogConfig::default())?;
            info!("Validating configuration");
            config_loader.load()?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");
            let default_config = GatewayConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| GatewayError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let command = args
        .command
        .as_ref()
        .map_or_else(|| "Start".to_string(), |command| format!("{command:?}"));

    if let Err(error) = run(args) {
        TracingErrorReporter
            .report(&ErrorContext::new(error, "main").with_details(format!("command {command}")));
        process::exit(1);
    }
}
