//! Shared test utilities for reg-db tests.

pub(crate) mod helpers {
    use crate::RegDb;
    use reg_core::entities::{Course, Student};

    /// Create an in-memory database for testing.
    pub async fn test_db() -> RegDb {
        RegDb::open_local(":memory:").await.unwrap()
    }

    /// Seed one student (convenience for enrollment tests).
    pub async fn seed_student(db: &RegDb, code: &str, first: &str, last: &str) -> Student {
        db.add_student(code, first, last, None).await.unwrap()
    }

    /// Seed one course (convenience for enrollment tests).
    pub async fn seed_course(db: &RegDb, code: &str, name: &str, instructor: &str) -> Course {
        db.add_course(code, name, instructor).await.unwrap()
    }
}
