//! Agent endpoints (yenta).

use crate::config::Config;
use crate::error::RezenError;
use crate::model::PagedResponse;
use crate::model::agent::{Agent, AgentSearchParams};
use crate::transport::{ApiRequest, Body, RequestExecutor};
use crate::utils::ids::require_uuid;
use serde_json::Value;
use std::sync::Arc;

/// Client for the agents API.
pub struct AgentsClient {
    executor: RequestExecutor,
}

impl AgentsClient {
    /// Creates a client against the configured yenta base URL.
    pub fn new(config: Arc<Config>) -> Result<Self, RezenError> {
        let base_url = config.endpoints.yenta.clone();
        Ok(Self {
            executor: RequestExecutor::new(config, base_url)?,
        })
    }

    /// Fetches an agent by yenta id.
    pub fn get_agent(&self, yenta_id: &str) -> Result<Agent, RezenError> {
        require_uuid("yenta_id", yenta_id)?;
        self.executor
            .execute(&ApiRequest::get(format!("/agents/{yenta_id}")))?
            .decode()
    }

    /// Looks up agents by email address.
    pub fn get_agents_by_email(&self, email: &str) -> Result<Vec<Agent>, RezenError> {
        if email.trim().is_empty() {
            return Err(RezenError::InvalidInput(
                "email must not be empty".to_string(),
            ));
        }
        let request = ApiRequest::get("/agents").with_query("email", email);
        match self.executor.execute(&request)? {
            Body::Array(items) => serde_json::from_value(Value::Array(items))
                .map_err(|e| RezenError::Deserialization(e.to_string())),
            other => other.decode::<Vec<Agent>>(),
        }
    }

    /// Pages through active agents.
    pub fn search_active_agents(
        &self,
        params: &AgentSearchParams,
    ) -> Result<PagedResponse<Agent>, RezenError> {
        let mut request = ApiRequest::get("/agents/search/active");
        for (name, value) in params.to_query() {
            request = request.with_query(name, value);
        }
        self.executor.execute(&request)?.decode()
    }

    /// Fetches an agent's downline sponsor tree (revenue share).
    ///
    /// The tree shape is deeply recursive and tier-dependent; it is returned
    /// undecoded for the caller to walk.
    pub fn get_sponsor_tree(&self, yenta_id: &str) -> Result<Body, RezenError> {
        require_uuid("yenta_id", yenta_id)?;
        self.executor
            .execute(&ApiRequest::get(format!("/agents/{yenta_id}/sponsor-tree")))
    }
}
