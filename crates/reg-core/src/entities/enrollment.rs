use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student-to-course enrollment. The (`student_id`, `course_id`) pair is
/// unique; rows are only ever created or deleted, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
}

/// One row of the enriched enrollment listing, joining an enrollment
/// against the current student and course rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrollmentView {
    pub enrollment_id: i64,
    pub student_code: String,
    pub student_name: String,
    pub course_code: String,
    pub course_name: String,
}

/// An `{id, label}` pair for picking a student or course.
///
/// The label is a human-readable composite (`"S001 - Ana Cruz"`,
/// `"CS101 - Intro"`); the id is what callers pass back to the registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
}
