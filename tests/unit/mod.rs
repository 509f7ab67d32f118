//! Unit test harness.

mod test_body;
mod test_env;
mod test_error;
mod test_retry;
