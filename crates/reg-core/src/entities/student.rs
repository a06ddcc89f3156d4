use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student record.
///
/// `id` is the database-assigned surrogate key; `student_code` is the
/// user-facing business key and unique across the directory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
}

impl Student {
    /// Display name: first and last name separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Selection label: `"S001 - Ana Cruz"`.
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.student_code, self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Student {
        Student {
            id: 1,
            student_code: "S001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Cruz".to_string(),
            middle_name: None,
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(sample().full_name(), "Ana Cruz");
    }

    #[test]
    fn option_label_prefixes_code() {
        assert_eq!(sample().option_label(), "S001 - Ana Cruz");
    }

    #[test]
    fn middle_name_serializes_as_null_when_absent() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json["middle_name"].is_null());
    }
}
