//! Typed request and response payloads.
//!
//! These mirror the platform's JSON envelopes. Fields the SDK does not
//! consume are left out; serde ignores unknown fields, so models stay small
//! and tolerant of server-side additions.

pub mod agent;
pub mod auth;
pub mod checklist;
pub mod directory;
pub mod team;
pub mod transaction;

use serde::{Deserialize, Serialize};

/// Standard paged envelope used by the search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    /// Zero-based page number
    #[serde(default)]
    pub page_number: Option<u32>,
    /// Requested page size
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Whether more pages follow
    #[serde(default)]
    pub has_next: Option<bool>,
    /// Total matching records, when the server reports it
    #[serde(default)]
    pub total_count: Option<u64>,
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}
