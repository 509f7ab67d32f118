//! Aggregate client for all platform services.
//!
//! # Example
//! ```ignore
//! use rezen_client::client::RezenClient;
//! use rezen_client::config::Config;
//!
//! let client = RezenClient::new(Config::with_api_key("key"))?;
//! let team = client.teams.get_team("a8b7...")?;
//! ```

use crate::api::{
    AgentsClient, AuthClient, ChecklistClient, DirectoryClient, TeamsClient,
    TransactionBuilderClient, TransactionsClient,
};
use crate::config::Config;
use crate::error::{ApiFailure, RezenError};
use std::sync::Arc;

/// One client per sub-service, sharing a single immutable configuration.
pub struct RezenClient {
    config: Arc<Config>,
    /// Transaction builder API (arrakis)
    pub transaction_builder: TransactionBuilderClient,
    /// Transactions API (arrakis)
    pub transactions: TransactionsClient,
    /// Agents API (yenta)
    pub agents: AgentsClient,
    /// Teams API (yenta)
    pub teams: TeamsClient,
    /// Directory API (yenta)
    pub directory: DirectoryClient,
    /// Checklist API (sherlock)
    pub checklist: ChecklistClient,
    /// Authentication API (keymaker)
    pub auth: AuthClient,
}

impl RezenClient {
    /// Creates a client for every service from one configuration.
    ///
    /// # Returns
    /// * `Err(RezenError::Authentication)` - when the API key is missing
    pub fn new(config: Config) -> Result<Self, RezenError> {
        if config.api_key.trim().is_empty() {
            return Err(RezenError::Authentication(ApiFailure {
                message: "no API key configured; set REZEN_API_KEY or use Config::with_api_key"
                    .to_string(),
                status: None,
                payload: None,
            }));
        }
        let config = Arc::new(config);

        Ok(Self {
            transaction_builder: TransactionBuilderClient::new(config.clone())?,
            transactions: TransactionsClient::new(config.clone())?,
            agents: AgentsClient::new(config.clone())?,
            teams: TeamsClient::new(config.clone())?,
            directory: DirectoryClient::new(config.clone())?,
            checklist: ChecklistClient::new(config.clone())?,
            auth: AuthClient::new(config.clone())?,
            config,
        })
    }

    /// Creates a client from environment configuration.
    pub fn from_env() -> Result<Self, RezenError> {
        Self::new(Config::new())
    }

    /// The configuration all sub-clients share.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
