//! Client configuration, loaded from the environment with parse-or-default
//! fallback. Immutable after construction; shared across service clients via
//! `Arc`.

use crate::constants::{
    DEFAULT_ARRAKIS_URL, DEFAULT_KEYMAKER_URL, DEFAULT_SHERLOCK_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_YENTA_URL,
};
use crate::transport::retry::RetryPolicy;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use tracing::{debug, error};

/// Base URLs for the platform's sub-services. Each logical service lives on
/// its own subdomain and each service client gets its own executor.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Transactions and transaction builder API
    pub arrakis: String,
    /// Agents, teams and directory API
    pub yenta: String,
    /// Checklist API
    pub sherlock: String,
    /// Authentication and MFA API
    pub keymaker: String,
}

impl Endpoints {
    /// Loads the base URLs, honoring per-service env overrides.
    pub fn from_env() -> Self {
        Self {
            arrakis: get_env_or_default("REZEN_ARRAKIS_URL", String::from(DEFAULT_ARRAKIS_URL)),
            yenta: get_env_or_default("REZEN_YENTA_URL", String::from(DEFAULT_YENTA_URL)),
            sherlock: get_env_or_default("REZEN_SHERLOCK_URL", String::from(DEFAULT_SHERLOCK_URL)),
            keymaker: get_env_or_default("REZEN_KEYMAKER_URL", String::from(DEFAULT_KEYMAKER_URL)),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Main configuration for the rezen client
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent on every authenticated request
    pub api_key: String,
    /// Default per-request timeout in seconds
    pub timeout_secs: u64,
    /// Retry behavior for transient failures
    pub retry: RetryPolicy,
    /// Per-service base URLs
    pub endpoints: Endpoints,
}

impl Config {
    /// Creates a configuration from the environment.
    ///
    /// Loads `.env` first, then reads `REZEN_API_KEY`,
    /// `REZEN_TIMEOUT_SECONDS`, `REZEN_MAX_RETRIES`,
    /// `REZEN_RETRY_BACKOFF_SECONDS` and the base-URL overrides. Invalid
    /// numeric values are logged and fall back to the built-in defaults;
    /// this constructor never fails.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("REZEN_API_KEY", String::new());
        if api_key.is_empty() {
            error!("REZEN_API_KEY not found in environment variables or .env file");
        }

        Config {
            api_key,
            timeout_secs: get_env_or_default("REZEN_TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::from_env(),
            endpoints: Endpoints::from_env(),
        }
    }

    /// Creates a configuration with an explicit API key, everything else
    /// from the environment or defaults.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            ..Self::new()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
