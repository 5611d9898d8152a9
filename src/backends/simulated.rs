//! Simulated backend services.
//!
//! Stand-ins for the real identity, authorization, and context stores:
//! each sleeps for a configured latency (plus optional jitter) while
//! watching the shared deadline, and fails outright with a configured
//! probability before doing any work. Profiles come from configuration
//! so the same implementations serve demos and failure injection.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::config::{BackendSimConfig, SimulatedBackendConfig};
use crate::orchestrator::{BackendError, DeadlineContext, ServiceOutcome};

use super::contract::{BackendCall, SummaryBackends};

impl SummaryBackends {
    /// Wire the simulated service set from configuration.
    pub fn simulated(config: &BackendSimConfig) -> Self {
        Self {
            identity: Arc::new(SimulatedIdentity::new(config.identity.clone())),
            access: Arc::new(SimulatedAccess::new(config.access.clone())),
            memory: Arc::new(SimulatedMemory::new(config.memory.clone())),
        }
    }
}

/// Identity resolution stand-in.
pub struct SimulatedIdentity {
    profile: SimulatedBackendConfig,
}

impl SimulatedIdentity {
    pub fn new(profile: SimulatedBackendConfig) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl BackendCall<String> for SimulatedIdentity {
    async fn call(&self, ctx: &DeadlineContext) -> ServiceOutcome<String> {
        if roll_failure(self.profile.failure_probability) {
            return Err(BackendError::Unavailable(
                "user service internal error".to_string(),
            ));
        }

        tokio::select! {
            _ = tokio::time::sleep(injected_delay(&self.profile)) => Ok("user".to_string()),
            _ = ctx.done() => Err(BackendError::Cancelled),
        }
    }
}

/// Authorization check stand-in. Grants access whenever it answers.
pub struct SimulatedAccess {
    profile: SimulatedBackendConfig,
}

impl SimulatedAccess {
    pub fn new(profile: SimulatedBackendConfig) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl BackendCall<bool> for SimulatedAccess {
    async fn call(&self, ctx: &DeadlineContext) -> ServiceOutcome<bool> {
        if roll_failure(self.profile.failure_probability) {
            return Err(BackendError::Unavailable(
                "permission service internal error".to_string(),
            ));
        }

        tokio::select! {
            _ = tokio::time::sleep(injected_delay(&self.profile)) => Ok(true),
            _ = ctx.done() => Err(BackendError::Cancelled),
        }
    }
}

/// Context enrichment stand-in with a wide latency spread.
pub struct SimulatedMemory {
    profile: SimulatedBackendConfig,
}

impl SimulatedMemory {
    pub fn new(profile: SimulatedBackendConfig) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl BackendCall<String> for SimulatedMemory {
    async fn call(&self, ctx: &DeadlineContext) -> ServiceOutcome<String> {
        if roll_failure(self.profile.failure_probability) {
            return Err(BackendError::Unavailable(
                "vector memory request failed".to_string(),
            ));
        }

        tokio::select! {
            _ = tokio::time::sleep(injected_delay(&self.profile)) => Ok("vector-memory".to_string()),
            _ = ctx.done() => Err(BackendError::Cancelled),
        }
    }
}

fn injected_delay(profile: &SimulatedBackendConfig) -> Duration {
    let jitter = if profile.jitter_ms == 0 {
        0
    } else {
        rand::thread_rng().gen_range(0..profile.jitter_ms)
    };
    Duration::from_millis(profile.latency_ms + jitter)
}

fn roll_failure(probability: f64) -> bool {
    probability > 0.0 && rand::thread_rng().gen_bool(probability)
}
