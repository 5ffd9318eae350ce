//! Boundary checks shared by the request payload types.

use super::DomainError;

/// Trim a required text field, rejecting blanks.
pub fn required_text(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank collapses to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalise and sanity-check an email address.
///
/// Only the shape is checked (one `@`, non-empty local part and a dotted
/// domain); deliverability is the identity provider's concern.
pub fn email(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = required_text(field, value)?;
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !trimmed.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(DomainError::validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(trimmed)
}
