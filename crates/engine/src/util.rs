//! Internal helpers for input validation and conversion.
//!
//! These utilities are **not** part of the public API.

use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Trim a required text field, rejecting empty values.
pub(crate) fn normalize_required_text(value: &str, field: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidField(format!(
            "{field} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Parse a UUID from storage and return a labeled error on failure.
pub(crate) fn parse_uuid(value: &str, label: &str) -> ResultEngine<Uuid> {
    Uuid::parse_str(value).map_err(|_| EngineError::InvalidId(format!("invalid {label} id")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_is_trimmed() {
        assert_eq!(
            normalize_required_text("  food ", "category").unwrap(),
            "food"
        );
        assert_eq!(
            normalize_required_text("   ", "category"),
            Err(EngineError::InvalidField(
                "category must not be empty".to_string()
            ))
        );
    }
}
