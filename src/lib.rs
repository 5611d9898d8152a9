//! Chat summary gateway.
//!
//! Answers a single read-only endpoint by querying three independent
//! backend capabilities concurrently under one shared deadline: identity
//! and authorization are required for a response, context enrichment is
//! included only when it arrives in time.

pub mod backends;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod orchestrator;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
