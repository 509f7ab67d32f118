//! Live transaction endpoints (arrakis).

use crate::config::Config;
use crate::error::RezenError;
use crate::model::transaction::{ParticipantTransactionsParams, Transaction};
use crate::transport::{ApiRequest, Body, RequestExecutor};
use crate::utils::ids::require_uuid;
use serde_json::Value;
use std::sync::Arc;

/// Client for the transactions API.
pub struct TransactionsClient {
    executor: RequestExecutor,
}

impl TransactionsClient {
    /// Creates a client against the configured arrakis base URL.
    pub fn new(config: Arc<Config>) -> Result<Self, RezenError> {
        let base_url = config.endpoints.arrakis.clone();
        Ok(Self {
            executor: RequestExecutor::new(config, base_url)?,
        })
    }

    /// Fetches a transaction by id.
    pub fn get_transaction(&self, transaction_id: &str) -> Result<Transaction, RezenError> {
        require_uuid("transaction_id", transaction_id)?;
        self.executor
            .execute(&ApiRequest::get(format!("/transactions/{transaction_id}")))?
            .decode()
    }

    /// Fetches a transaction by its human-facing code.
    pub fn get_transaction_by_code(&self, code: &str) -> Result<Transaction, RezenError> {
        if code.trim().is_empty() {
            return Err(RezenError::InvalidInput(
                "transaction code must not be empty".to_string(),
            ));
        }
        self.executor
            .execute(&ApiRequest::get(format!("/transactions/code/{code}")))?
            .decode()
    }

    /// Lists transactions a participant is on, optionally filtered.
    ///
    /// The listing endpoint has answered with both a bare array and a paged
    /// object over its lifetime; both shapes are handled here.
    pub fn get_participant_transactions(
        &self,
        yenta_id: &str,
        params: &ParticipantTransactionsParams,
    ) -> Result<Vec<Transaction>, RezenError> {
        require_uuid("yenta_id", yenta_id)?;
        let mut request = ApiRequest::get(format!("/transactions/participant/{yenta_id}"));
        for (name, value) in params.to_query() {
            request = request.with_query(name, value);
        }

        match self.executor.execute(&request)? {
            Body::Array(items) => serde_json::from_value(Value::Array(items))
                .map_err(|e| RezenError::Deserialization(e.to_string())),
            Body::Object(map) => {
                let results = map
                    .get("results")
                    .cloned()
                    .unwrap_or_else(|| Value::Array(Vec::new()));
                serde_json::from_value(results)
                    .map_err(|e| RezenError::Deserialization(e.to_string()))
            }
            Body::Scalar(other) => Err(RezenError::Deserialization(format!(
                "unexpected transaction listing shape: {other}"
            ))),
        }
    }
}
