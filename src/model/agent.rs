use serde::{Deserialize, Serialize};

/// An agent record from the yenta API.
///
/// The platform calls this id a "yenta id"; several endpoints use it
/// interchangeably with "user id".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Yenta id of the agent
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub agent_status: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub agent_account_country: Option<String>,
}

/// Query parameters for the active-agent search.
#[derive(Debug, Clone, Default)]
pub struct AgentSearchParams {
    /// Zero-based page number
    pub page_number: Option<u32>,
    /// Page size
    pub page_size: Option<u32>,
    /// Free-text name filter
    pub name: Option<String>,
}

impl AgentSearchParams {
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
        query
    }
}
