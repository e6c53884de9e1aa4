//! Presence checks applied to request payloads before they reach the database.
//!
//! A field counts as missing when it is absent, `null`, or (for text) blank
//! after trimming.

use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Require a non-blank text field, returning it trimmed.
pub fn required_text(field: &str, value: Option<String>) -> AppResult<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(missing(field)),
    }
}

/// Require a non-null field.
pub fn required<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| missing(field))
}

/// Normalize an optional text field: trimmed, blank becomes `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Collapse repeated ids while keeping the caller's order.
pub fn unique_ids(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

fn missing(field: &str) -> AppError {
    AppError::InvalidInput(format!("{} is required", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_falsy_values() {
        assert!(required_text("name", None).is_err());
        assert!(required_text("name", Some(String::new())).is_err());
        assert!(required_text("name", Some("   ".to_string())).is_err());

        let err = required_text("location", None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: location is required");
    }

    #[test]
    fn test_required_text_trims() {
        assert_eq!(
            required_text("name", Some("  Safety Officer ".to_string())).unwrap(),
            "Safety Officer"
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some(" ".to_string())), None);
        assert_eq!(optional_text(Some(" x ".to_string())), Some("x".to_string()));
    }

    #[test]
    fn test_unique_ids_keeps_first_occurrence_order() {
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();
        let c = Uuid::now_v7();
        assert_eq!(unique_ids(vec![b, a, b, c, a]), vec![b, a, c]);
        assert!(unique_ids(vec![]).is_empty());
    }
}
