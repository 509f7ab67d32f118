use serde::{Deserialize, Serialize};

/// Credentials for the signin endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    pub email_address: String,
    pub password: String,
}

/// Result of a signin attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    /// Set when the account requires a second factor to finish signin
    #[serde(default)]
    pub mfa_required: Option<bool>,
}

/// Body for the password-update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// The authenticated user's identity summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
}
