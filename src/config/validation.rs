//! Semantic configuration checks.
//!
//! Serde guarantees the shape; this module checks that the values make
//! sense together before the gateway starts.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in an otherwise well-formed config.
#[derive(Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("orchestrator.gather_budget_ms must be greater than zero")]
    ZeroGatherBudget,

    #[error("orchestrator.request_timeout_secs must exceed the gather budget")]
    RequestTimeoutBelowBudget,

    #[error("backends.{service}.failure_probability {value} is outside 0.0..=1.0")]
    FailureProbabilityOutOfRange { service: &'static str, value: f64 },
}

/// Check cross-field constraints, collecting every violation.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.orchestrator.gather_budget_ms == 0 {
        errors.push(ValidationError::ZeroGatherBudget);
    } else if config.orchestrator.request_timeout() <= config.orchestrator.gather_budget() {
        errors.push(ValidationError::RequestTimeoutBelowBudget);
    }

    for (service, profile) in [
        ("identity", &config.backends.identity),
        ("access", &config.backends.access),
        ("memory", &config.backends.memory),
    ] {
        if !(0.0..=1.0).contains(&profile.failure_probability) {
            errors.push(ValidationError::FailureProbabilityOutOfRange {
                service,
                value: profile.failure_probability,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
