//! Retry policy for HTTP requests.
//!
//! The decision of whether to retry, and after how long, is a pure function
//! of the attempt number and the attempt outcome, so it can be unit tested
//! without performing sleeps or network calls. The executor owns the actual
//! waiting.

use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BACKOFF_SECS, TRANSIENT_STATUS_CODES};
use crate::utils::config::get_env_or_default;
use std::time::Duration;
use tracing::error;

/// Outcome of a single request attempt, as seen by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The server answered with this HTTP status
    Status(u16),
    /// The request failed below HTTP (connection refused, timeout, ...)
    Transport,
}

/// Configuration for HTTP request retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt (0 = no retries)
    pub max_retries: u32,
    /// Base delay in seconds for exponential backoff
    pub backoff_secs: f64,
}

impl RetryPolicy {
    /// Creates a policy with an explicit retry count and backoff base.
    #[must_use]
    pub fn new(max_retries: u32, backoff_secs: f64) -> Self {
        Self {
            max_retries,
            backoff_secs,
        }
    }

    /// Creates a policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self::new(0, DEFAULT_RETRY_BACKOFF_SECS)
    }

    /// Loads the policy from `REZEN_MAX_RETRIES` and
    /// `REZEN_RETRY_BACKOFF_SECONDS`, falling back to the built-in defaults
    /// when a variable is missing, does not parse, or parses to a value no
    /// backoff can be built from (negative or non-finite).
    #[must_use]
    pub fn from_env() -> Self {
        let backoff_secs: f64 = get_env_or_default(
            "REZEN_RETRY_BACKOFF_SECONDS",
            DEFAULT_RETRY_BACKOFF_SECS,
        );
        let backoff_secs = if backoff_secs.is_finite() && backoff_secs >= 0.0 {
            backoff_secs
        } else {
            error!(
                "REZEN_RETRY_BACKOFF_SECONDS must be a finite non-negative number, got {}, using default",
                backoff_secs
            );
            DEFAULT_RETRY_BACKOFF_SECS
        };

        Self {
            max_retries: get_env_or_default("REZEN_MAX_RETRIES", DEFAULT_MAX_RETRIES),
            backoff_secs,
        }
    }

    /// Backoff delay for the given attempt: `backoff * 2^attempt`,
    /// attempt counted from 0. A backoff that cannot form a duration
    /// (negative or non-finite) degrades to a zero delay; the retry loop
    /// must never panic on a bad configuration value.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let secs = self.backoff_secs * f64::from(1u32 << attempt.min(31));
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }

    /// Decides whether the given attempt outcome should be retried.
    ///
    /// Returns the delay to wait before the next attempt, or `None` when the
    /// outcome is not retryable or the retry budget is spent. Retryable
    /// outcomes are the transient statuses {500, 502, 503, 504} and any
    /// transport-level failure; 4xx statuses are never retried.
    ///
    /// # Arguments
    ///
    /// * `attempt` - Zero-based index of the attempt that just failed
    /// * `outcome` - What the attempt produced
    #[must_use]
    pub fn retry_delay(&self, attempt: u32, outcome: AttemptOutcome) -> Option<Duration> {
        if attempt >= self.max_retries {
            return None;
        }
        let retryable = match outcome {
            AttemptOutcome::Status(status) => TRANSIENT_STATUS_CODES.contains(&status),
            AttemptOutcome::Transport => true,
        };
        retryable.then(|| self.delay_for(attempt))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_env()
    }
}
