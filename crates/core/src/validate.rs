//! Input validators for write payloads.
//!
//! Only checks that the column types already imply (non-blank text,
//! length caps, URL shape). Uniqueness and referential integrity are
//! enforced by the database and classified at the API boundary.

use crate::error::CoreError;

/// Maximum length for name-like fields (category, color, season, host names
/// and hex codes).
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for usernames.
pub const MAX_USERNAME_LENGTH: usize = 150;

/// Maximum length for picture URLs.
pub const MAX_URL_LENGTH: usize = 200;

/// Validate a name-like field: must be non-blank and within the length cap.
///
/// `field` names the offending field in the error message.
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    validate_text(field, value, MAX_NAME_LENGTH)
}

/// Validate a username: same rules as names, longer cap.
pub fn validate_username(value: &str) -> Result<(), CoreError> {
    validate_text("username", value, MAX_USERNAME_LENGTH)
}

/// Validate a picture URL: non-blank, http(s) scheme, within the length cap.
pub fn validate_url(field: &str, value: &str) -> Result<(), CoreError> {
    validate_text(field, value, MAX_URL_LENGTH)?;

    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(CoreError::Validation(format!(
            "{field} must be an http:// or https:// URL"
        )));
    }
    Ok(())
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    if value.len() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max_len} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
