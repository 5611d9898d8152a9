//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from config
//! files, and every field has a default so an empty file is runnable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the summary gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Orchestration deadline settings.
    pub orchestrator: OrchestratorConfig,

    /// Simulated backend behavior (latency and failure injection).
    pub backends: BackendSimConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Orchestration deadline settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Shared deadline budget for one gather pass, in milliseconds.
    /// Every backend call races against this single cutoff.
    pub gather_budget_ms: u64,

    /// Whole-request ceiling enforced by the HTTP layer, in seconds.
    /// Must leave room above the gather budget.
    pub request_timeout_secs: u64,
}

impl OrchestratorConfig {
    /// Gather budget as a duration.
    pub fn gather_budget(&self) -> Duration {
        Duration::from_millis(self.gather_budget_ms)
    }

    /// Request ceiling as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            gather_budget_ms: 200,
            request_timeout_secs: 5,
        }
    }
}

/// Latency and failure profile for one simulated backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulatedBackendConfig {
    /// Fixed latency in milliseconds.
    pub latency_ms: u64,

    /// Additional uniform random latency in `0..jitter_ms` milliseconds.
    #[serde(default)]
    pub jitter_ms: u64,

    /// Probability in `0.0..=1.0` that a call fails before doing any work.
    #[serde(default)]
    pub failure_probability: f64,
}

/// Simulated behavior for the three backend services.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendSimConfig {
    /// Identity resolution profile.
    pub identity: SimulatedBackendConfig,

    /// Authorization check profile.
    pub access: SimulatedBackendConfig,

    /// Context enrichment profile.
    pub memory: SimulatedBackendConfig,
}

impl Default for BackendSimConfig {
    fn default() -> Self {
        Self {
            identity: SimulatedBackendConfig {
                latency_ms: 10,
                jitter_ms: 0,
                failure_probability: 0.1,
            },
            access: SimulatedBackendConfig {
                latency_ms: 50,
                jitter_ms: 0,
                failure_probability: 0.1,
            },
            memory: SimulatedBackendConfig {
                latency_ms: 0,
                jitter_ms: 400,
                failure_probability: 0.0,
            },
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
