use serde::{Deserialize, Serialize};

/// A team record from the yenta API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub team_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time as epoch milliseconds
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Query parameters for the team search endpoint.
#[derive(Debug, Clone, Default)]
pub struct TeamSearchParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    /// Team name filter
    pub name: Option<String>,
    /// ACTIVE or INACTIVE
    pub status: Option<String>,
    /// NORMAL, PLATINUM, GROUP, DOMESTIC, PRO
    pub team_type: Option<String>,
}

impl TeamSearchParams {
    /// Marshals the set parameters into query pairs.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page_number) = self.page_number {
            query.push(("pageNumber".to_string(), page_number.to_string()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(name) = &self.name {
            query.push(("name".to_string(), name.clone()));
        }
        if let Some(status) = &self.status {
            query.push(("status".to_string(), status.clone()));
        }
        if let Some(team_type) = &self.team_type {
            query.push(("teamType".to_string(), team_type.clone()));
        }
        query
    }
}
