//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum setup, middleware, summary route)
//!     → orchestrator (concurrent backend fan-out)
//!     → response.rs (aggregate as JSON, or failure status)
//! ```

pub mod response;
pub mod server;

pub use server::HttpServer;
