use rezen_client::transport::retry::{AttemptOutcome, RetryPolicy};
use std::time::Duration;

#[test]
fn test_none_policy_never_retries() {
    let policy = RetryPolicy::none();
    assert_eq!(policy.max_retries, 0);
    assert_eq!(
        policy.retry_delay(0, AttemptOutcome::Status(503)),
        None
    );
    assert_eq!(policy.retry_delay(0, AttemptOutcome::Transport), None);
}

#[test]
fn test_transient_statuses_are_retryable() {
    let policy = RetryPolicy::new(3, 0.5);
    for status in [500u16, 502, 503, 504] {
        assert!(
            policy.retry_delay(0, AttemptOutcome::Status(status)).is_some(),
            "status {status} should be retryable"
        );
    }
}

#[test]
fn test_client_errors_are_never_retried() {
    let policy = RetryPolicy::new(10, 0.5);
    for status in [400u16, 401, 403, 404, 409, 422, 429] {
        assert_eq!(
            policy.retry_delay(0, AttemptOutcome::Status(status)),
            None,
            "status {status} must not be retried"
        );
    }
}

#[test]
fn test_transport_failures_are_retryable() {
    let policy = RetryPolicy::new(1, 0.5);
    assert!(policy.retry_delay(0, AttemptOutcome::Transport).is_some());
    assert_eq!(policy.retry_delay(1, AttemptOutcome::Transport), None);
}

#[test]
fn test_backoff_doubles_per_attempt() {
    let policy = RetryPolicy::new(4, 0.5);
    assert_eq!(policy.delay_for(0), Duration::from_millis(500));
    assert_eq!(policy.delay_for(1), Duration::from_millis(1000));
    assert_eq!(policy.delay_for(2), Duration::from_millis(2000));
    assert_eq!(policy.delay_for(3), Duration::from_millis(4000));
}

#[test]
fn test_retry_delay_matches_backoff_schedule() {
    let policy = RetryPolicy::new(3, 0.25);
    assert_eq!(
        policy.retry_delay(0, AttemptOutcome::Status(502)),
        Some(Duration::from_millis(250))
    );
    assert_eq!(
        policy.retry_delay(1, AttemptOutcome::Status(502)),
        Some(Duration::from_millis(500))
    );
    assert_eq!(
        policy.retry_delay(2, AttemptOutcome::Status(502)),
        Some(Duration::from_millis(1000))
    );
}

#[test]
fn test_budget_exhaustion_boundary() {
    // max_retries = 2 means attempts 0 and 1 are retried, attempt 2 is not:
    // three attempts and two waits in total.
    let policy = RetryPolicy::new(2, 0.0);
    assert!(policy.retry_delay(0, AttemptOutcome::Status(503)).is_some());
    assert!(policy.retry_delay(1, AttemptOutcome::Status(503)).is_some());
    assert_eq!(policy.retry_delay(2, AttemptOutcome::Status(503)), None);
    assert_eq!(policy.retry_delay(3, AttemptOutcome::Status(503)), None);
}

#[test]
fn test_negative_backoff_degrades_to_zero_delay() {
    // A backoff no duration can be built from must not panic the retry
    // decision; it degrades to an immediate retry.
    let policy = RetryPolicy::new(2, -0.5);
    assert_eq!(
        policy.retry_delay(0, AttemptOutcome::Status(503)),
        Some(Duration::ZERO)
    );
    assert_eq!(policy.delay_for(3), Duration::ZERO);
}

#[test]
fn test_non_finite_backoff_never_panics() {
    for backoff in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let policy = RetryPolicy::new(1, backoff);
        assert_eq!(
            policy.retry_delay(0, AttemptOutcome::Transport),
            Some(Duration::ZERO),
            "backoff {backoff} must not panic"
        );
    }
}

#[test]
fn test_zero_backoff_yields_zero_delay() {
    let policy = RetryPolicy::new(2, 0.0);
    assert_eq!(
        policy.retry_delay(0, AttemptOutcome::Status(504)),
        Some(Duration::ZERO)
    );
}
