//! Input validation shared by the services.

use coachlink_types::error::ValidationError;

/// Longest user id the chat vendor accepts.
pub const MAX_USER_ID_LEN: usize = 255;

/// Validate a vendor user id and return it trimmed.
///
/// Ids must be non-empty, at most [`MAX_USER_ID_LEN`] bytes, and contain only
/// ASCII letters, digits, `@`, `_` or `-`.
pub fn validate_user_id(field: &'static str, raw: Option<&str>) -> Result<String, ValidationError> {
    let id = require(field, raw)?;

    if id.len() > MAX_USER_ID_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_USER_ID_LEN,
        });
    }

    if let Some(ch) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '@' | '_' | '-')))
    {
        return Err(ValidationError::InvalidCharacter { field, ch });
    }

    Ok(id)
}

/// Longest channel id the chat vendor accepts.
pub const MAX_CHANNEL_ID_LEN: usize = 64;

/// Validate a derived vendor channel id.
///
/// Channel ids are narrower than user ids: at most [`MAX_CHANNEL_ID_LEN`]
/// bytes of ASCII letters, digits, `-`, `_` or `!`. No `@`.
pub fn validate_channel_id(id: &str) -> Result<(), ValidationError> {
    const FIELD: &str = "channel_id";

    if id.len() > MAX_CHANNEL_ID_LEN {
        return Err(ValidationError::TooLong {
            field: FIELD,
            max: MAX_CHANNEL_ID_LEN,
        });
    }

    if let Some(ch) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '!')))
    {
        return Err(ValidationError::InvalidCharacter { field: FIELD, ch });
    }

    Ok(())
}

/// Require a non-blank value and return it trimmed.
pub fn require(field: &'static str, raw: Option<&str>) -> Result<String, ValidationError> {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::Missing { field }),
    }
}
