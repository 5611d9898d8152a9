//! Shared utilities for integration testing.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use summary_gateway::backends::{BackendCall, SummaryBackends};
use summary_gateway::orchestrator::{BackendError, DeadlineContext, ServiceOutcome};

/// Backend double that answers with a fixed outcome after a delay,
/// honouring cancellation like any well-behaved backend.
pub struct ScriptedCall<T> {
    delay: Duration,
    outcome: ServiceOutcome<T>,
}

#[async_trait]
impl<T: Clone + Send + Sync> BackendCall<T> for ScriptedCall<T> {
    async fn call(&self, ctx: &DeadlineContext) -> ServiceOutcome<T> {
        tokio::select! {
            _ = tokio::time::sleep(self.delay) => self.outcome.clone(),
            _ = ctx.done() => Err(BackendError::Cancelled),
        }
    }
}

/// A backend answering `value` after `delay`.
pub fn ok_after<T: Clone + Send + Sync + 'static>(
    delay: Duration,
    value: T,
) -> Arc<dyn BackendCall<T>> {
    Arc::new(ScriptedCall {
        delay,
        outcome: Ok(value),
    })
}

/// A backend failing immediately with `message`.
#[allow(dead_code)]
pub fn failing<T: Clone + Send + Sync + 'static>(message: &str) -> Arc<dyn BackendCall<T>> {
    Arc::new(ScriptedCall {
        delay: Duration::ZERO,
        outcome: Err(BackendError::Unavailable(message.to_string())),
    })
}

/// A fast, fully healthy backend set.
pub fn healthy_backends() -> SummaryBackends {
    SummaryBackends {
        identity: ok_after(Duration::from_millis(5), "user-1".to_string()),
        access: ok_after(Duration::from_millis(5), true),
        memory: ok_after(Duration::from_millis(5), "vector-memory".to_string()),
    }
}
