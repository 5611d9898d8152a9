//! Backend call contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::orchestrator::{DeadlineContext, ServiceOutcome};

/// A single backend capability.
///
/// Implementations must race their own work against `ctx.done()` and
/// return promptly once the context is finished; blocking past the
/// deadline is a contract violation. Returning a value and an error at
/// the same time is impossible by construction.
#[async_trait]
pub trait BackendCall<T>: Send + Sync {
    async fn call(&self, ctx: &DeadlineContext) -> ServiceOutcome<T>;
}

/// The backend set consulted for one summary.
///
/// Identity and access are critical; memory is best-effort.
#[derive(Clone)]
pub struct SummaryBackends {
    pub identity: Arc<dyn BackendCall<String>>,
    pub access: Arc<dyn BackendCall<bool>>,
    pub memory: Arc<dyn BackendCall<String>>,
}
