//! Team endpoints (yenta).

use crate::config::Config;
use crate::error::RezenError;
use crate::model::PagedResponse;
use crate::model::team::{Team, TeamSearchParams};
use crate::transport::{ApiRequest, RequestExecutor};
use crate::utils::ids::require_uuid;
use std::sync::Arc;

/// Client for the teams API.
pub struct TeamsClient {
    executor: RequestExecutor,
}

impl TeamsClient {
    /// Creates a client against the configured yenta base URL.
    pub fn new(config: Arc<Config>) -> Result<Self, RezenError> {
        let base_url = config.endpoints.yenta.clone();
        Ok(Self {
            executor: RequestExecutor::new(config, base_url)?,
        })
    }

    /// Pages through teams matching the given filters.
    pub fn search_teams(
        &self,
        params: &TeamSearchParams,
    ) -> Result<PagedResponse<Team>, RezenError> {
        let mut request = ApiRequest::get("/teams/search/all");
        for (name, value) in params.to_query() {
            request = request.with_query(name, value);
        }
        self.executor.execute(&request)?.decode()
    }

    /// Fetches a team by id.
    pub fn get_team(&self, team_id: &str) -> Result<Team, RezenError> {
        require_uuid("team_id", team_id)?;
        self.executor
            .execute(&ApiRequest::get(format!("/teams/{team_id}")))?
            .decode()
    }
}
