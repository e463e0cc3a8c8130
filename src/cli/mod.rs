use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::application::LedgerService;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3002;

/// Ledger API - in-memory account ledger over HTTP
#[derive(Parser, Debug)]
#[command(name = "ledger-api")]
#[command(about = "Create accounts, query balances, deposit and withdraw over HTTP/JSON")]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        self.init_logging()?;

        let service = Arc::new(LedgerService::default());
        let app = api::router(service);

        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Server is running on port {}", self.port);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("Server stopped");
        Ok(())
    }

    /// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
    fn init_logging(&self) -> Result<()> {
        let default_level = if self.verbose { "debug" } else { "info" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
