// Generic field-level checks shared by the entity validators
use crate::error::{ComplianceError, Result};
use crate::patterns::{EMAIL_PATTERN, PHONE_DIGITS, PHONE_FORMATTING};

/// Non-blank text, optionally bounded in length (counted in characters after trimming)
pub fn validate_required_text_field(
    field: &'static str,
    value: &str,
    min_len: Option<usize>,
    max_len: Option<usize>,
) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ComplianceError::invalid(field, "is required"));
    }

    let len = trimmed.chars().count();
    if let Some(min) = min_len {
        if len < min {
            return Err(ComplianceError::invalid(
                field,
                format!("must be at least {} characters", min),
            ));
        }
    }
    if let Some(max) = max_len {
        if len > max {
            return Err(ComplianceError::invalid(
                field,
                format!("must be at most {} characters", max),
            ));
        }
    }

    Ok(())
}

/// Structural `local@domain.tld` check. Intentionally lenient.
pub fn validate_email(value: &str) -> Result<()> {
    if EMAIL_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ComplianceError::invalid("email", "is not a valid email address"))
    }
}

/// Strips spaces, dashes, parentheses and dots, then requires 10-15 digits
pub fn validate_phone(value: &str) -> Result<()> {
    let digits = PHONE_FORMATTING.replace_all(value.trim(), "");
    if PHONE_DIGITS.is_match(&digits) {
        Ok(())
    } else {
        Err(ComplianceError::invalid(
            "phone",
            "must contain 10-15 digits",
        ))
    }
}

/// Apply `check` only when an optional field carries a non-blank value
pub(crate) fn validate_optional<F>(value: Option<&str>, check: F) -> Result<()>
where
    F: Fn(&str) -> Result<()>,
{
    match value {
        Some(v) if !v.trim().is_empty() => check(v),
        _ => Ok(()),
    }
}
