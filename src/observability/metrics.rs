//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_summary_requests_total` (counter): summary requests by outcome
//! - `gateway_gather_duration_seconds` (histogram): orchestration latency
//! - `gateway_backend_calls_total` (counter): backend calls by service, status

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with an HTTP scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one summary request with its terminal outcome.
pub fn record_summary(outcome: &'static str, start: Instant) {
    metrics::counter!("gateway_summary_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("gateway_gather_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

/// Record one backend call outcome.
pub fn record_backend_call(service: &'static str, status: &'static str) {
    metrics::counter!("gateway_backend_calls_total", "service" => service, "status" => status)
        .increment(1);
}
