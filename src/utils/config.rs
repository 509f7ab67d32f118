use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to `default` when the variable
/// is missing or does not parse as `T`.
///
/// A parse failure is logged but never raised; configuration loading must not
/// fail because of a malformed value.
///
/// # Arguments
///
/// * `env_var` - Name of the environment variable
/// * `default` - Value to use when the variable is absent or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}
