//! Backend capabilities consulted by the orchestrator.
//!
//! # Responsibilities
//! - Define the call contract every dependency satisfies
//! - Provide the simulated identity/access/memory implementations
//!
//! The orchestrator only knows the contract; whether a backend is real
//! or simulated is decided at wiring time.

pub mod contract;
pub mod simulated;

pub use contract::{BackendCall, SummaryBackends};
