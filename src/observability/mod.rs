//! Observability subsystem.
//!
//! Structured logs go through `tracing` (initialized in `main`); metrics
//! are exposed for Prometheus scrape when enabled in config.

pub mod metrics;
