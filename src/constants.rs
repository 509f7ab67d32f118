//! Global constants: production base URLs, header names and built-in defaults.

/// Base URL for the transactions and transaction builder API (arrakis)
pub const DEFAULT_ARRAKIS_URL: &str = "https://arrakis.therealbrokerage.com/api/v1";

/// Base URL for the agents, teams and directory API (yenta)
pub const DEFAULT_YENTA_URL: &str = "https://yenta.therealbrokerage.com/api/v1";

/// Base URL for the checklist API (sherlock)
pub const DEFAULT_SHERLOCK_URL: &str = "https://sherlock.therealbrokerage.com/api/v1";

/// Base URL for the authentication and MFA API (keymaker)
pub const DEFAULT_KEYMAKER_URL: &str = "https://keymaker.therealbrokerage.com/api/v1";

/// Header carrying the API key on every authenticated request
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum retry count (0 = no retries)
pub const DEFAULT_MAX_RETRIES: u32 = 0;

/// Default base delay in seconds for exponential backoff
pub const DEFAULT_RETRY_BACKOFF_SECS: f64 = 0.5;

/// HTTP status codes treated as transient and eligible for retry
pub const TRANSIENT_STATUS_CODES: [u16; 4] = [500, 502, 503, 504];

/// Troubleshooting hint appended to 400 responses from owner-info endpoints.
/// The server enforces a setup order on transaction builders and rejects
/// owner agent assignment until the earlier steps are done.
pub const OWNER_INFO_HINT: &str = " Hint: owner agent info can only be set after \
location info, price/date info, and at least one buyer or seller have been added \
to the transaction builder, in that order.";
