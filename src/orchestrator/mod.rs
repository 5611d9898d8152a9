//! Scatter-gather orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! gather()
//!     → context.rs (shared deadline, cancelled once per request)
//!     → one task per backend call, one single-slot channel each
//!     → critical phase: identity + access raced against the deadline
//!     → best-effort phase: memory raced against what is left of it
//!     → Summary { user, access, memory? }
//! ```
//!
//! # Design Decisions
//! - Each result channel is written exactly once and read at most once;
//!   an abandoned result never blocks its producer
//! - The first critical error, denial, or deadline expiry decides the
//!   request; remaining work is released via cancellation, not awaited
//! - Which critical result arrives first never changes the summary's
//!   content, only how early a failure is reported

pub mod context;
pub mod error;
pub mod gather;

pub use context::DeadlineContext;
pub use error::{BackendError, GatherError, ServiceOutcome};
pub use gather::{Orchestrator, Summary};
