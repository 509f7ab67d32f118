//! # rezen-client
//!
//! Synchronous client for the Real brokerage REST APIs: transaction
//! builder, transactions, agents, teams, directory, checklists and
//! authentication.
//!
//! Every endpoint wrapper is a thin mapping to one HTTP call. The shared
//! [`transport::RequestExecutor`] does the real work: it joins the URL,
//! sends the request through a persistent blocking session, retries
//! transient failures with exponential backoff and translates every non-2xx
//! status into a typed [`error::RezenError`].
//!
//! ## Quick start
//! ```ignore
//! use rezen_client::prelude::*;
//!
//! let client = RezenClient::from_env()?;
//! let agents = client.agents.search_active_agents(&AgentSearchParams {
//!     page_size: Some(50),
//!     ..Default::default()
//! })?;
//! ```
//!
//! Configuration comes from the environment (`REZEN_API_KEY`,
//! `REZEN_TIMEOUT_SECONDS`, `REZEN_MAX_RETRIES`,
//! `REZEN_RETRY_BACKOFF_SECONDS`), with built-in defaults when a variable
//! is missing or malformed.

/// Per-service endpoint clients
pub mod api;
/// Aggregate client
pub mod client;
/// Environment-backed configuration
pub mod config;
/// Base URLs, header names and defaults
pub mod constants;
/// Typed error hierarchy
pub mod error;
/// Request and response payload models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// HTTP transport: executor, retry policy, body decoding
pub mod transport;
/// Env, logger and id helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version.
pub fn version() -> &'static str {
    VERSION
}
