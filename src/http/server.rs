//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router with the summary and health routes
//! - Wire up middleware (request ceiling, request ID, tracing)
//! - Dispatch the summary route to the orchestrator
//! - Render the aggregate as JSON, or a failure status

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::backends::SummaryBackends;
use crate::config::GatewayConfig;
use crate::observability::metrics;
use crate::orchestrator::{GatherError, Orchestrator};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

/// HTTP server for the summary gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and backend
    /// set.
    pub fn new(config: GatewayConfig, backends: SummaryBackends) -> Self {
        let orchestrator = Arc::new(Orchestrator::new(
            backends,
            config.orchestrator.gather_budget(),
        ));

        let state = AppState { orchestrator };
        let router = Self::build_router(&config, state);

        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/v1/chat/summary", get(summary_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(config.orchestrator.request_timeout()))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Summary aggregation handler.
///
/// Fans out to the backend services through the orchestrator and renders
/// whatever it decides.
async fn summary_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let start = Instant::now();
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::debug!(request_id = %request_id, "Gathering summary");

    let result = state.orchestrator.gather().await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(GatherError::Backend(_)) => "backend_error",
        Err(GatherError::AccessDenied) => "denied",
        Err(GatherError::DeadlineExceeded) => "timeout",
    };
    metrics::record_summary(outcome, start);

    match result {
        Ok(summary) => {
            tracing::debug!(
                request_id = %request_id,
                elapsed = ?start.elapsed(),
                enriched = summary.memory.is_some(),
                "Summary assembled"
            );
            Json(summary).into_response()
        }
        Err(err) => {
            tracing::warn!(request_id = %request_id, error = %err, "Summary request failed");
            err.into_response()
        }
    }
}

/// Liveness probe.
async fn health_handler() -> StatusCode {
    StatusCode::OK
}
