use serde::{Deserialize, Serialize};

/// A vendor record from the directory API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A person record from the directory API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPerson {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Query parameters shared by the directory search endpoints.
#[derive(Debug, Clone, Default)]
pub struct DirectorySearchParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    /// Free-text search over name and email
    pub search_text: Option<String>,
    /// Include archived entries
    pub is_archived: Option<bool>,
}

impl DirectorySearchParams {
    /// Marshals the set parameters into query pairs.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page_number) = self.page_number {
            query.push(("pageNumber".to_string(), page_number.to_string()));
        }
        if let Some(page_size) = self.page_size {
            query.push(("pageSize".to_string(), page_size.to_string()));
        }
        if let Some(search_text) = &self.search_text {
            query.push(("searchText".to_string(), search_text.clone()));
        }
        if let Some(is_archived) = self.is_archived {
            query.push(("isArchived".to_string(), is_archived.to_string()));
        }
        query
    }
}
