//! Presence checks shared by the request DTOs.

use crate::errors::domain::DomainError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trimmed `value`, or a validation error naming `field` when it is blank.
pub fn required(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Optional free text: blank collapses to `None`.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Emails are matched case-insensitively, so they are stored trimmed and lower-cased.
pub fn normalize_email(raw: &str) -> Result<String, DomainError> {
    let email = raw.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(DomainError::validation("A valid email is required")),
    }
}

pub fn check_password(password: &str) -> Result<(), DomainError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Largest accepted money amount, in whole currency units.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Money amounts are whole currency units in `1..=MAX_AMOUNT`.
pub fn positive_amount(field: &str, value: i64) -> Result<i64, DomainError> {
    if value <= 0 {
        return Err(DomainError::validation(format!("{field} must be greater than 0")));
    }
    if value > MAX_AMOUNT {
        return Err(DomainError::validation(format!(
            "{field} must be at most {MAX_AMOUNT}"
        )));
    }
    Ok(value)
}

/// PATCH bodies must change at least one field.
pub fn ensure_changes(any: bool) -> Result<(), DomainError> {
    if any {
        Ok(())
    } else {
        Err(DomainError::validation("No fields to update"))
    }
}
