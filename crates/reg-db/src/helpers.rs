//! Row-parsing and input-validation helpers shared by the repos.

use crate::error::DatabaseError;

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty
/// string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Validate a required text field: trim surrounding whitespace and reject
/// blank input.
///
/// # Errors
///
/// Returns `DatabaseError::Validation` naming the field when the trimmed
/// value is empty.
pub fn required_field(field: &'static str, value: &str) -> Result<String, DatabaseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DatabaseError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Normalize an optional text field: trim, mapping blank input to `None`
/// so it persists as SQL NULL rather than an empty string.
#[must_use]
pub fn optional_field(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field_trims() {
        assert_eq!(required_field("first_name", "  Ana ").unwrap(), "Ana");
    }

    #[test]
    fn required_field_rejects_blank() {
        let result = required_field("first_name", "   ");
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
    }

    #[test]
    fn optional_field_maps_blank_to_none() {
        assert_eq!(optional_field(Some("   ")), None);
        assert_eq!(optional_field(None), None);
        assert_eq!(optional_field(Some(" Q. ")), Some("Q.".to_string()));
    }
}
