use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A course record. `course_code` is the unique business key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub course_name: String,
    pub instructor: String,
}

impl Course {
    /// Selection label: `"CS101 - Intro"`.
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.course_code, self.course_name)
    }
}
