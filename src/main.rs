//! Chat summary gateway binary.
//!
//! ```text
//!                      ┌───────────────────────────────────────────┐
//!                      │              SUMMARY GATEWAY               │
//!                      │                                            │
//!   GET /api/v1/chat/  │  ┌────────┐      ┌──────────────────┐     │
//!   summary ───────────┼─▶│  http  │─────▶│   orchestrator   │     │
//!                      │  │ server │      │  (scatter-gather) │     │
//!                      │  └────────┘      └───┬────┬────┬────┘     │
//!                      │                      │    │    │           │
//!                      │                identity access memory      │
//!                      │                (critical) (critical) (best- │
//!                      │                                    effort) │
//!                      └───────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use summary_gateway::backends::SummaryBackends;
use summary_gateway::config::{self, GatewayConfig};
use summary_gateway::lifecycle::{self, Shutdown};
use summary_gateway::observability::metrics;
use summary_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "summary-gateway")]
#[command(about = "Scatter-gather chat summary gateway", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => GatewayConfig::default(),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        gather_budget_ms = config.orchestrator.gather_budget_ms,
        request_timeout_secs = config.orchestrator.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let backends = SummaryBackends::simulated(&config.backends);
    let server = HttpServer::new(config, backends);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(lifecycle::trigger_on_ctrl_c(shutdown));

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
