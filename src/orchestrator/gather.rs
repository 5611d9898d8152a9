//! Scatter-gather core.
//!
//! # Responsibilities
//! - Launch one concurrent task per backend call
//! - Race the critical calls against the shared deadline
//! - Give the best-effort call whatever budget remains
//! - Assemble the summary, or report the first terminal failure

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::oneshot;

use crate::backends::{BackendCall, SummaryBackends};
use crate::observability::metrics;

use super::context::DeadlineContext;
use super::error::{BackendError, GatherError, ServiceOutcome};

/// Number of backend calls the response cannot be built without.
const CRITICAL_CALLS: usize = 2;

/// The field mapping returned to the caller on success.
///
/// `user` and `access` are always present; `memory` is present only when
/// the enrichment call answered within the deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub user: String,
    pub access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

/// Coordinates one pass of concurrent backend calls under a shared
/// deadline.
pub struct Orchestrator {
    backends: SummaryBackends,
    budget: Duration,
}

impl Orchestrator {
    /// Create an orchestrator with a fixed per-request deadline budget.
    pub fn new(backends: SummaryBackends, budget: Duration) -> Self {
        Self { backends, budget }
    }

    /// Query all backends concurrently and assemble the summary.
    ///
    /// Identity and access are critical: the first error, denial, or
    /// deadline expiry aborts the request without waiting for whatever is
    /// still in flight. Memory is best-effort: its failure or lateness
    /// only drops the `memory` field.
    pub async fn gather(&self) -> Result<Summary, GatherError> {
        let ctx = DeadlineContext::with_budget(self.budget);
        // Cancelled when this function returns, releasing in-flight tasks.
        let _release = ctx.cancel_guard();

        let mut user_rx = spawn_call("identity", self.backends.identity.clone(), &ctx);
        let mut access_rx = spawn_call("access", self.backends.access.clone(), &ctx);
        let mut memory_rx = spawn_call("memory", self.backends.memory.clone(), &ctx);

        let mut user = None;
        let mut access = None;

        for _ in 0..CRITICAL_CALLS {
            tokio::select! {
                outcome = &mut user_rx, if user.is_none() => {
                    user = Some(critical_value(outcome)?);
                }
                outcome = &mut access_rx, if access.is_none() => {
                    let granted = critical_value(outcome)?;
                    if !granted {
                        return Err(GatherError::AccessDenied);
                    }
                    access = Some(granted);
                }
                _ = ctx.done() => {
                    return Err(GatherError::DeadlineExceeded);
                }
            }
        }

        let (Some(user), Some(access)) = (user, access) else {
            // One critical slot fills per iteration, so both are present.
            return Err(GatherError::DeadlineExceeded);
        };

        let memory = tokio::select! {
            outcome = &mut memory_rx => match outcome {
                Ok(Ok(value)) => Some(value),
                Ok(Err(err)) => {
                    tracing::debug!(error = %err, "memory enrichment dropped");
                    None
                }
                Err(_) => None,
            },
            _ = ctx.done() => {
                tracing::debug!("response without memory enrichment");
                None
            }
        };

        Ok(Summary { user, access, memory })
    }
}

/// Launch one backend call on its own task, reporting through a
/// single-slot channel.
///
/// The send is infallible from the producer's point of view: if the
/// response was already decided the outcome is discarded and the task
/// exits without ever blocking.
fn spawn_call<T: Send + 'static>(
    service: &'static str,
    call: Arc<dyn BackendCall<T>>,
    ctx: &DeadlineContext,
) -> oneshot::Receiver<ServiceOutcome<T>> {
    let (tx, rx) = oneshot::channel();
    let ctx = ctx.clone();

    tokio::spawn(async move {
        let outcome = call.call(&ctx).await;
        let status = match &outcome {
            Ok(_) => "ok",
            Err(BackendError::Cancelled) => "cancelled",
            Err(BackendError::Unavailable(_)) => "error",
        };
        metrics::record_backend_call(service, status);
        let _ = tx.send(outcome);
    });

    rx
}

/// Unwrap one critical outcome onto the request-level taxonomy.
///
/// A call that observed cancellation itself is reported as a deadline
/// expiry, not a dependency fault.
fn critical_value<T>(
    outcome: Result<ServiceOutcome<T>, oneshot::error::RecvError>,
) -> Result<T, GatherError> {
    match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(BackendError::Cancelled)) => Err(GatherError::DeadlineExceeded),
        Ok(Err(err)) => Err(GatherError::Backend(err)),
        Err(_) => Err(GatherError::Backend(BackendError::Unavailable(
            "backend task exited before reporting".to_string(),
        ))),
    }
}
