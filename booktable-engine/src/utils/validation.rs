//! Input validation
//!
//! Centralized length limits and field checks shared by every service.

use crate::core::error::AppError;

// ============================================================================
// Text length limits
// ============================================================================

/// Entity names: restaurants, tables, people
pub const MAX_NAME_LEN: usize = 200;

/// Free text: descriptions, review comments
pub const MAX_TEXT_LEN: usize = 2000;

/// Short identifiers: cuisine, phone, zip code, state
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321 upper bound)
pub const MAX_EMAIL_LEN: usize = 254;

/// Street addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

// ============================================================================
// Validation helpers
// ============================================================================

/// Required text field: non-empty after trimming, bounded length
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if trimmed.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Text field that may be empty but not oversized
pub fn validate_bounded_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Optional text field: when present, non-empty and bounded
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(text) => validate_required_text(text, field, max_len),
        None => Ok(()),
    }
}

/// Party sizes start at one guest
pub fn validate_party_size(party_size: i32) -> Result<(), AppError> {
    if party_size < 1 {
        return Err(AppError::validation(format!(
            "party_size must be at least 1, got {party_size}"
        )));
    }
    Ok(())
}

/// Minimal email shape check; real verification is out of scope
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let trimmed = email.trim();
    if !trimmed.contains('@') || trimmed.starts_with('@') || trimmed.ends_with('@') {
        return Err(AppError::validation(format!("'{email}' is not a valid email address")));
    }
    Ok(())
}
