//! HTTP transport: request values, retry policy, response decoding and the
//! executor that ties them together.

pub mod executor;
pub mod request;
pub mod response;
pub mod retry;

pub use executor::RequestExecutor;
pub use request::{ApiRequest, FilePart, Payload};
pub use response::Body;
pub use retry::{AttemptOutcome, RetryPolicy};
