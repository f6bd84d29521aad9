//! Input validation helpers
//!
//! Centralized text length constants and validation functions. The mock
//! tables have no storage-level enforcement, so every write path funnels
//! through these.

use rust_decimal::Decimal;
use shared::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: dish, category, customer
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: Option<&str>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a money amount is not negative.
pub fn validate_non_negative(value: Decimal, field: &str) -> AppResult<()> {
    if value < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_values() {
        assert!(validate_required_text("Ana", "customer name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "customer name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "customer name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_checks_length_only_when_present() {
        assert!(validate_optional_text(None, "notes", 5).is_ok());
        assert!(validate_optional_text(Some("ok"), "notes", 5).is_ok());
        assert!(validate_optional_text(Some("too long"), "notes", 5).is_err());
    }

    #[test]
    fn non_negative_rejects_negative_amounts() {
        assert!(validate_non_negative(Decimal::ZERO, "price").is_ok());
        assert!(validate_non_negative(Decimal::new(-1, 2), "price").is_err());
    }
}
