//! Transaction builder endpoints (arrakis).
//!
//! A builder is a draft transaction. The server enforces a setup order on
//! it: location info, then price/date info, then buyers/sellers, then the
//! owner agent. Violating the order comes back as a 400; the error
//! translation layer appends a hint for the owner-info case.

use crate::config::Config;
use crate::error::RezenError;
use crate::transport::{ApiRequest, Body, RequestExecutor};
use crate::utils::ids::require_uuid;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Client for the transaction builder API.
pub struct TransactionBuilderClient {
    executor: RequestExecutor,
}

impl TransactionBuilderClient {
    /// Creates a client against the configured arrakis base URL.
    pub fn new(config: Arc<Config>) -> Result<Self, RezenError> {
        let base_url = config.endpoints.arrakis.clone();
        Ok(Self {
            executor: RequestExecutor::new(config, base_url)?,
        })
    }

    /// Creates a new transaction builder and returns its id.
    ///
    /// # Arguments
    /// * `builder_type` - TRANSACTION or LISTING
    pub fn create(&self, builder_type: &str) -> Result<String, RezenError> {
        let request =
            ApiRequest::post("/transaction-builder").with_query("type", builder_type);
        let body = self.executor.execute(&request)?;

        // The endpoint answers with either a bare id string or {"id": ...}
        // depending on API vintage.
        let id = match &body {
            Body::Scalar(Value::String(id)) => Some(id.clone()),
            Body::Object(map) => map
                .get("id")
                .and_then(Value::as_str)
                .map(str::to_owned),
            _ => None,
        };
        let id = id.ok_or_else(|| {
            RezenError::Deserialization("transaction builder create returned no id".to_string())
        })?;
        info!("Created transaction builder {}", id);
        Ok(id)
    }

    /// Fetches the current state of a builder.
    pub fn get(&self, builder_id: &str) -> Result<Body, RezenError> {
        require_uuid("builder_id", builder_id)?;
        self.executor
            .execute(&ApiRequest::get(format!("/transaction-builder/{builder_id}")))
    }

    /// Sets the property location on a builder. First step of the setup
    /// order.
    pub fn update_location_info(
        &self,
        builder_id: &str,
        info: Value,
    ) -> Result<Body, RezenError> {
        require_uuid("builder_id", builder_id)?;
        self.executor.execute(
            &ApiRequest::put(format!("/transaction-builder/{builder_id}/location-info"))
                .with_json(info),
        )
    }

    /// Sets price and key dates on a builder.
    pub fn update_price_and_date_info(
        &self,
        builder_id: &str,
        info: Value,
    ) -> Result<Body, RezenError> {
        require_uuid("builder_id", builder_id)?;
        self.executor.execute(
            &ApiRequest::put(format!(
                "/transaction-builder/{builder_id}/price-date-info"
            ))
            .with_json(info),
        )
    }

    /// Adds a buyer to a builder.
    pub fn add_buyer(&self, builder_id: &str, buyer: Value) -> Result<Body, RezenError> {
        require_uuid("builder_id", builder_id)?;
        self.executor.execute(
            &ApiRequest::put(format!("/transaction-builder/{builder_id}/buyers"))
                .with_json(buyer),
        )
    }

    /// Adds a seller to a builder.
    pub fn add_seller(&self, builder_id: &str, seller: Value) -> Result<Body, RezenError> {
        require_uuid("builder_id", builder_id)?;
        self.executor.execute(
            &ApiRequest::put(format!("/transaction-builder/{builder_id}/sellers"))
                .with_json(seller),
        )
    }

    /// Assigns the owner agent. Must come after location, price/date and
    /// parties; a premature call fails with a validation error carrying the
    /// setup-order hint.
    pub fn update_owner_agent_info(
        &self,
        builder_id: &str,
        info: Value,
    ) -> Result<Body, RezenError> {
        require_uuid("builder_id", builder_id)?;
        self.executor.execute(
            &ApiRequest::put(format!("/transaction-builder/{builder_id}/owner-info"))
                .with_json(info),
        )
    }

    /// Submits the builder, turning it into a live transaction.
    pub fn submit(&self, builder_id: &str) -> Result<Body, RezenError> {
        require_uuid("builder_id", builder_id)?;
        self.executor
            .execute(&ApiRequest::post(format!(
                "/transaction-builder/{builder_id}/submit"
            )))
    }

    /// Deletes a builder.
    pub fn delete(&self, builder_id: &str) -> Result<(), RezenError> {
        require_uuid("builder_id", builder_id)?;
        self.executor
            .execute(&ApiRequest::delete(format!(
                "/transaction-builder/{builder_id}"
            )))
            .map(|_| ())
    }
}
