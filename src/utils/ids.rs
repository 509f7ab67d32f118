use crate::error::RezenError;
use once_cell::sync::Lazy;
use regex::Regex;

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("hard-coded UUID pattern is valid")
});

/// Returns true when `value` is a canonically formatted UUID.
pub fn is_uuid(value: &str) -> bool {
    UUID_RE.is_match(value)
}

/// Checks a UUID-typed path parameter before it reaches the network.
///
/// The platform's ids (transaction ids, yenta/agent ids, checklist item ids)
/// are all UUIDs; a malformed id fails fast as [`RezenError::InvalidInput`]
/// instead of producing a confusing 400 or 404 round-trip.
///
/// # Arguments
///
/// * `name` - Parameter name used in the error message
/// * `value` - Candidate id
pub fn require_uuid(name: &str, value: &str) -> Result<(), RezenError> {
    if is_uuid(value) {
        Ok(())
    } else {
        Err(RezenError::InvalidInput(format!(
            "{name} must be a UUID, got '{value}'"
        )))
    }
}
