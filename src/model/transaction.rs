use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A transaction record from the arrakis API.
///
/// Nested sections (address, participants, commission splits) vary widely
/// by transaction type and stay as raw JSON for the caller to interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub lifecycle_state: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub checklist_id: Option<String>,
}

/// Monetary amount with currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Filters for a participant's transaction listing.
#[derive(Debug, Clone, Default)]
pub struct ParticipantTransactionsParams {
    /// Only transactions updated on or after this date
    pub updated_after: Option<NaiveDate>,
    /// Lifecycle filter, e.g. CLOSED or TERMINATED
    pub lifecycle_state: Option<String>,
}

impl ParticipantTransactionsParams {
    /// Marshals the set filters into query pairs. Dates go out as
    /// `YYYY-MM-DD`.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(updated_after) = self.updated_after {
            query.push((
                "updatedAfter".to_string(),
                updated_after.format("%Y-%m-%d").to_string(),
            ));
        }
        if let Some(lifecycle_state) = &self.lifecycle_state {
            query.push(("lifecycleState".to_string(), lifecycle_state.clone()));
        }
        query
    }
}
