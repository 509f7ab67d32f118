//! Authentication endpoints (keymaker).
//!
//! Signin runs before any API key exists, so it suppresses the API-key
//! header on its own request. The password flow needs a one-off bearer
//! token; it goes out as a per-call header override, never by mutating the
//! session's default headers.

use crate::config::Config;
use crate::error::RezenError;
use crate::model::auth::{CurrentUser, SigninRequest, SigninResponse, UpdatePasswordRequest};
use crate::transport::{ApiRequest, RequestExecutor};
use std::sync::Arc;

/// Client for the authentication API.
pub struct AuthClient {
    executor: RequestExecutor,
}

impl AuthClient {
    /// Creates a client against the configured keymaker base URL.
    pub fn new(config: Arc<Config>) -> Result<Self, RezenError> {
        let base_url = config.endpoints.keymaker.clone();
        Ok(Self {
            executor: RequestExecutor::new(config, base_url)?,
        })
    }

    /// Signs in with email and password. Sent without the API-key header.
    pub fn signin(&self, email: &str, password: &str) -> Result<SigninResponse, RezenError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(RezenError::InvalidInput(
                "email and password must not be empty".to_string(),
            ));
        }
        let body = serde_json::to_value(SigninRequest {
            email_address: email.to_string(),
            password: password.to_string(),
        })?;
        self.executor
            .execute(
                &ApiRequest::post("/auth/signin")
                    .with_json(body)
                    .without_api_key(),
            )?
            .decode()
    }

    /// Signs out the current session.
    pub fn signout(&self) -> Result<(), RezenError> {
        self.executor
            .execute(&ApiRequest::post("/auth/signout"))
            .map(|_| ())
    }

    /// Changes the password for the user owning `access_token`.
    ///
    /// The bearer token rides on this call only, as a per-call header
    /// override.
    pub fn update_password(
        &self,
        access_token: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), RezenError> {
        if new_password.is_empty() {
            return Err(RezenError::InvalidInput(
                "new password must not be empty".to_string(),
            ));
        }
        let body = serde_json::to_value(UpdatePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        })?;
        self.executor
            .execute(
                &ApiRequest::post("/auth/password-update")
                    .with_json(body)
                    .with_header("Authorization", format!("Bearer {access_token}"))
                    .without_api_key(),
            )
            .map(|_| ())
    }

    /// Fetches the identity of the user behind the configured API key.
    pub fn get_current_user(&self) -> Result<CurrentUser, RezenError> {
        self.executor
            .execute(&ApiRequest::get("/myself"))?
            .decode()
    }
}
