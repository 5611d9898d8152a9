//! Failure taxonomy for backend calls and whole gather passes.

use thiserror::Error;

/// Failure produced by a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The dependency answered with a fault of its own.
    #[error("{0}")]
    Unavailable(String),

    /// The shared deadline finished while the call was still waiting.
    #[error("call cancelled by deadline")]
    Cancelled,
}

/// Terminal outcome of a gather pass.
///
/// Any of these ends the request; best-effort failures never surface
/// here, they only narrow the summary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatherError {
    /// A critical backend call failed.
    #[error("critical backend failed: {0}")]
    Backend(#[from] BackendError),

    /// The authorization check answered without error but refused access.
    #[error("access denied by policy")]
    AccessDenied,

    /// Not all critical calls resolved before the deadline.
    #[error("deadline exceeded before critical services responded")]
    DeadlineExceeded,
}

/// Outcome of one backend call, moved across the task boundary exactly
/// once: produced when the call returns, consumed by the gather loop or
/// abandoned.
pub type ServiceOutcome<T> = Result<T, BackendError>;
