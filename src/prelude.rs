//! # Prelude
//!
//! Curated re-exports of the types needed for most interactions with the
//! platform.
//!
//! ## Usage
//!
//! ```rust
//! use rezen_client::prelude::*;
//!
//! let config = Config::with_api_key("key");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::config::{Config, Endpoints};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{ApiFailure, RezenError};

// ============================================================================
// CLIENTS
// ============================================================================

/// Aggregate client
pub use crate::client::RezenClient;

/// Per-service clients
pub use crate::api::{
    AgentsClient, AuthClient, ChecklistClient, DirectoryClient, TeamsClient,
    TransactionBuilderClient, TransactionsClient,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Request/response primitives for custom calls
pub use crate::transport::{ApiRequest, Body, FilePart, Payload, RequestExecutor, RetryPolicy};

// ============================================================================
// MODELS
// ============================================================================

/// Paged search envelope
pub use crate::model::PagedResponse;

/// Agent models
pub use crate::model::agent::{Agent, AgentSearchParams};

/// Team models
pub use crate::model::team::{Team, TeamSearchParams};

/// Transaction models
pub use crate::model::transaction::{Money, ParticipantTransactionsParams, Transaction};

/// Checklist models
pub use crate::model::checklist::{Checklist, ChecklistDocument, ChecklistItem};

/// Directory models
pub use crate::model::directory::{DirectoryPerson, DirectorySearchParams, Vendor};

/// Auth models
pub use crate::model::auth::{CurrentUser, SigninRequest, SigninResponse, UpdatePasswordRequest};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
