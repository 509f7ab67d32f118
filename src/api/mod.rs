//! Per-service clients. Each one is a thin wrapper: build a path and
//! parameters, hand an [`crate::transport::ApiRequest`] to its executor,
//! decode the result.

pub mod agents;
pub mod auth;
pub mod checklist;
pub mod directory;
pub mod teams;
pub mod transaction_builder;
pub mod transactions;

pub use agents::AgentsClient;
pub use auth::AuthClient;
pub use checklist::ChecklistClient;
pub use directory::DirectoryClient;
pub use teams::TeamsClient;
pub use transaction_builder::TransactionBuilderClient;
pub use transactions::TransactionsClient;
