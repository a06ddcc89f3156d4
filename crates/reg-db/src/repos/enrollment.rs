//! Enrollment registry: enroll/unenroll plus the enriched listing.
//!
//! Composes the student directory and course catalog: referenced rows are
//! resolved through them before an enrollment is created, and the listing
//! joins both for display.

use reg_core::entities::{Enrollment, EnrollmentView, SelectOption};

use crate::RegDb;
use crate::error::DatabaseError;

impl RegDb {
    /// All enrollments joined against current student and course rows,
    /// ordered by student code then course code.
    pub async fn list_enrollments(&self) -> Result<Vec<EnrollmentView>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT e.id, s.student_code, s.first_name || ' ' || s.last_name, \
                        c.course_code, c.course_name \
                 FROM enrollments e \
                 JOIN students s ON e.student_id = s.id \
                 JOIN courses c ON e.course_id = c.id \
                 ORDER BY s.student_code, c.course_code",
                (),
            )
            .await?;

        let mut views = Vec::new();
        while let Some(row) = rows.next().await? {
            views.push(EnrollmentView {
                enrollment_id: row.get(0)?,
                student_code: row.get(1)?,
                student_name: row.get(2)?,
                course_code: row.get(3)?,
                course_name: row.get(4)?,
            });
        }
        Ok(views)
    }

    /// Students as `{id, label}` selection options, ordered by code.
    pub async fn available_students(&self) -> Result<Vec<SelectOption>, DatabaseError> {
        let students = self.list_students().await?;
        Ok(students
            .iter()
            .map(|s| SelectOption {
                id: s.id,
                label: s.option_label(),
            })
            .collect())
    }

    /// Courses as `{id, label}` selection options, ordered by code.
    pub async fn available_courses(&self) -> Result<Vec<SelectOption>, DatabaseError> {
        let courses = self.list_courses().await?;
        Ok(courses
            .iter()
            .map(|c| SelectOption {
                id: c.id,
                label: c.option_label(),
            })
            .collect())
    }

    /// Enroll a student in a course.
    ///
    /// Both referenced rows must exist in the current directory/catalog.
    /// An existing (student, course) pair fails with
    /// [`DatabaseError::DuplicateEnrollment`] and inserts nothing; callers
    /// treat that outcome as information, not a failure.
    pub async fn enroll(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Enrollment, DatabaseError> {
        let student = self.get_student(student_id).await?;
        let course = self.get_course(course_id).await?;

        let mut rows = self
            .conn()
            .query(
                "SELECT id FROM enrollments WHERE student_id = ?1 AND course_id = ?2",
                libsql::params![student_id, course_id],
            )
            .await?;
        if rows.next().await?.is_some() {
            return Err(DatabaseError::DuplicateEnrollment {
                student_id,
                course_id,
            });
        }

        let result = self
            .conn()
            .execute(
                "INSERT INTO enrollments (student_id, course_id) VALUES (?1, ?2)",
                libsql::params![student_id, course_id],
            )
            .await;
        if let Err(error) = result {
            // Two concurrent enrolls can both pass the check above; the
            // UNIQUE(student_id, course_id) constraint catches the loser.
            if error.to_string().contains("UNIQUE constraint failed") {
                return Err(DatabaseError::DuplicateEnrollment {
                    student_id,
                    course_id,
                });
            }
            return Err(error.into());
        }

        let id = self.conn().last_insert_rowid();
        tracing::debug!(
            id,
            student = %student.student_code,
            course = %course.course_code,
            "enrolled"
        );

        Ok(Enrollment {
            id,
            student_id,
            course_id,
        })
    }

    /// Remove an enrollment by id.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id names no row: the id always comes from a
    /// just-rendered listing, so a miss means the listing is stale.
    pub async fn unenroll(&self, enrollment_id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .conn()
            .execute(
                "DELETE FROM enrollments WHERE id = ?1",
                libsql::params![enrollment_id],
            )
            .await?;

        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "enrollment",
                id: enrollment_id,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_course, seed_student, test_db};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn enroll_and_list_view() {
        let db = test_db().await;
        let student = seed_student(&db, "S001", "Ana", "Cruz").await;
        let course = seed_course(&db, "CS101", "Intro", "Dr. Lee").await;

        let enrollment = db.enroll(student.id, course.id).await.unwrap();
        assert_eq!(enrollment.student_id, student.id);
        assert_eq!(enrollment.course_id, course.id);

        let views = db.list_enrollments().await.unwrap();
        assert_eq!(
            views,
            vec![EnrollmentView {
                enrollment_id: enrollment.id,
                student_code: "S001".to_string(),
                student_name: "Ana Cruz".to_string(),
                course_code: "CS101".to_string(),
                course_name: "Intro".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn enroll_twice_reports_duplicate_and_keeps_one_row() {
        let db = test_db().await;
        let student = seed_student(&db, "S001", "Ana", "Cruz").await;
        let course = seed_course(&db, "CS101", "Intro", "Dr. Lee").await;

        db.enroll(student.id, course.id).await.unwrap();
        let second = db.enroll(student.id, course.id).await;

        assert!(matches!(
            second,
            Err(DatabaseError::DuplicateEnrollment { .. })
        ));
        assert_eq!(db.list_enrollments().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn enroll_missing_student_not_found() {
        let db = test_db().await;
        let course = seed_course(&db, "CS101", "Intro", "Dr. Lee").await;

        let result = db.enroll(999, course.id).await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity: "student", .. })
        ));
        assert!(db.list_enrollments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn enroll_missing_course_not_found() {
        let db = test_db().await;
        let student = seed_student(&db, "S001", "Ana", "Cruz").await;

        let result = db.enroll(student.id, 999).await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity: "course", .. })
        ));
    }

    #[tokio::test]
    async fn unenroll_removes_exactly_the_target_row() {
        let db = test_db().await;
        let student = seed_student(&db, "S001", "Ana", "Cruz").await;
        let intro = seed_course(&db, "CS101", "Intro", "Dr. Lee").await;
        let compilers = seed_course(&db, "CS301", "Compilers", "Dr. Kim").await;

        let first = db.enroll(student.id, intro.id).await.unwrap();
        db.enroll(student.id, compilers.id).await.unwrap();

        db.unenroll(first.id).await.unwrap();

        let views = db.list_enrollments().await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].course_code, "CS301");
    }

    #[tokio::test]
    async fn unenroll_missing_not_found() {
        let db = test_db().await;

        let result = db.unenroll(123).await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity: "enrollment", id: 123 })
        ));
    }

    #[tokio::test]
    async fn available_options_use_code_dash_name_labels() {
        let db = test_db().await;
        seed_student(&db, "S002", "Ben", "Diaz").await;
        seed_student(&db, "S001", "Ana", "Cruz").await;
        seed_course(&db, "CS101", "Intro", "Dr. Lee").await;

        let students = db.available_students().await.unwrap();
        let labels: Vec<&str> = students.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["S001 - Ana Cruz", "S002 - Ben Diaz"]);

        let courses = db.available_courses().await.unwrap();
        assert_eq!(courses[0].label, "CS101 - Intro");
    }

    #[tokio::test]
    async fn delete_student_cascades_to_enrollments() {
        let db = test_db().await;
        let student = seed_student(&db, "S001", "Ana", "Cruz").await;
        let course = seed_course(&db, "CS101", "Intro", "Dr. Lee").await;
        db.enroll(student.id, course.id).await.unwrap();

        db.delete_student(student.id).await.unwrap();

        assert!(db.list_enrollments().await.unwrap().is_empty());
        // The course itself is untouched.
        assert_eq!(db.list_courses().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_course_cascades_to_enrollments() {
        let db = test_db().await;
        let student = seed_student(&db, "S001", "Ana", "Cruz").await;
        let course = seed_course(&db, "CS101", "Intro", "Dr. Lee").await;
        db.enroll(student.id, course.id).await.unwrap();

        db.delete_course(course.id).await.unwrap();

        assert!(db.list_enrollments().await.unwrap().is_empty());
        assert_eq!(db.list_students().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn listing_ordered_by_student_then_course() {
        let db = test_db().await;
        let ana = seed_student(&db, "S001", "Ana", "Cruz").await;
        let ben = seed_student(&db, "S002", "Ben", "Diaz").await;
        let intro = seed_course(&db, "CS101", "Intro", "Dr. Lee").await;
        let compilers = seed_course(&db, "CS301", "Compilers", "Dr. Kim").await;

        // Insert in an order that differs from the expected listing order.
        db.enroll(ben.id, intro.id).await.unwrap();
        db.enroll(ana.id, compilers.id).await.unwrap();
        db.enroll(ana.id, intro.id).await.unwrap();

        let keys: Vec<(String, String)> = db
            .list_enrollments()
            .await
            .unwrap()
            .into_iter()
            .map(|v| (v.student_code, v.course_code))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("S001".to_string(), "CS101".to_string()),
                ("S001".to_string(), "CS301".to_string()),
                ("S002".to_string(), "CS101".to_string()),
            ]
        );
    }
}
