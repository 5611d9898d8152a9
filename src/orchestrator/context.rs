//! Per-request deadline and cancellation.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Shared deadline for one gather pass.
///
/// Cloned into every backend task. Carries a fixed expiry plus a
/// cancellation token that is cancelled exactly once when the owning
/// request finishes, releasing any task still waiting on it.
#[derive(Debug, Clone)]
pub struct DeadlineContext {
    deadline: Instant,
    token: CancellationToken,
}

impl DeadlineContext {
    /// Create a context expiring `budget` from now.
    pub fn with_budget(budget: Duration) -> Self {
        Self {
            deadline: Instant::now() + budget,
            token: CancellationToken::new(),
        }
    }

    /// Resolves once the deadline has passed or the request finished.
    pub async fn done(&self) {
        tokio::select! {
            _ = tokio::time::sleep_until(self.deadline) => {}
            _ = self.token.cancelled() => {}
        }
    }

    /// RAII guard that cancels the context when dropped.
    ///
    /// The orchestrator holds this for the lifetime of one gather pass so
    /// in-flight tasks observe cancellation as soon as the response is
    /// decided, whether that was a success or a failure.
    pub fn cancel_guard(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }
}
