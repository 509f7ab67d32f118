use rezen_client::transport::retry::RetryPolicy;
use rezen_client::utils::config::get_env_or_default;
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("REZEN_TEST_STRING", "from-env");
        let result: String = get_env_or_default("REZEN_TEST_STRING", "default".to_string());
        assert_eq!(result, "from-env");
        env::remove_var("REZEN_TEST_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("REZEN_TEST_MISSING");
    }
    let result: u64 = get_env_or_default("REZEN_TEST_MISSING", 30);
    assert_eq!(result, 30);
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("REZEN_TEST_INVALID", "thirty");
        let result: u64 = get_env_or_default("REZEN_TEST_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("REZEN_TEST_INVALID");
    }
}

#[test]
fn test_get_env_or_default_with_float() {
    unsafe {
        env::set_var("REZEN_TEST_FLOAT", "1.25");
        let result: f64 = get_env_or_default("REZEN_TEST_FLOAT", 0.5);
        assert!((result - 1.25).abs() < f64::EPSILON);
        env::remove_var("REZEN_TEST_FLOAT");
    }
}

// All REZEN_MAX_RETRIES / REZEN_RETRY_BACKOFF_SECONDS scenarios live in one
// test; tests run in parallel and these variables are process-global.
#[test]
fn test_retry_policy_env_fallbacks() {
    unsafe {
        // A malformed value falls back to the default without erroring.
        env::set_var("REZEN_MAX_RETRIES", "not-a-number");
        env::remove_var("REZEN_RETRY_BACKOFF_SECONDS");
        let policy = RetryPolicy::from_env();
        assert_eq!(policy.max_retries, 0);
        assert!((policy.backoff_secs - 0.5).abs() < f64::EPSILON);

        // A parseable but unusable backoff (negative) also falls back.
        env::set_var("REZEN_RETRY_BACKOFF_SECONDS", "-2");
        let policy = RetryPolicy::from_env();
        assert!((policy.backoff_secs - 0.5).abs() < f64::EPSILON);
        env::set_var("REZEN_RETRY_BACKOFF_SECONDS", "inf");
        let policy = RetryPolicy::from_env();
        assert!((policy.backoff_secs - 0.5).abs() < f64::EPSILON);

        // Valid values are honored.
        env::set_var("REZEN_MAX_RETRIES", "4");
        env::set_var("REZEN_RETRY_BACKOFF_SECONDS", "1.5");
        let policy = RetryPolicy::from_env();
        assert_eq!(policy.max_retries, 4);
        assert!((policy.backoff_secs - 1.5).abs() < f64::EPSILON);

        env::remove_var("REZEN_MAX_RETRIES");
        env::remove_var("REZEN_RETRY_BACKOFF_SECONDS");
        let policy = RetryPolicy::from_env();
        assert_eq!(policy.max_retries, 0);
    }
}
