//! Database error types for reg-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A required field was missing or empty after trimming.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The targeted row does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The student already has an enrollment for this course. Benign:
    /// callers report it as information, not a failure.
    #[error("student {student_id} is already enrolled in course {course_id}")]
    DuplicateEnrollment { student_id: i64, course_id: i64 },

    /// Schema application failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying libSQL error: connectivity, constraint violations,
    /// malformed statements. Surfaced with the engine's message, never
    /// retried.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
