//! Course catalog: CRUD + substring search.
//!
//! Structurally the same protocol as the student directory; search covers
//! course code and name only (instructor is not searchable).

use reg_core::entities::Course;

use crate::RegDb;
use crate::error::DatabaseError;
use crate::helpers::required_field;

const SELECT_COLS: &str = "id, course_code, course_name, instructor";

fn row_to_course(row: &libsql::Row) -> Result<Course, DatabaseError> {
    Ok(Course {
        id: row.get(0)?,
        course_code: row.get(1)?,
        course_name: row.get(2)?,
        instructor: row.get(3)?,
    })
}

impl RegDb {
    /// All courses, ordered by course code.
    pub async fn list_courses(&self) -> Result<Vec<Course>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM courses ORDER BY course_code"),
                (),
            )
            .await?;

        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }
        Ok(courses)
    }

    /// Case-insensitive substring search over course code and name.
    pub async fn search_courses(&self, query: &str) -> Result<Vec<Course>, DatabaseError> {
        let pattern = format!("%{}%", query.trim().to_lowercase());
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM courses \
                     WHERE LOWER(course_code) LIKE ?1 OR LOWER(course_name) LIKE ?1 \
                     ORDER BY course_code"
                ),
                libsql::params![pattern],
            )
            .await?;

        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }
        Ok(courses)
    }

    pub async fn get_course(&self, id: i64) -> Result<Course, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM courses WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "course",
            id,
        })?;
        row_to_course(&row)
    }

    /// Insert a course. All three fields are required.
    pub async fn add_course(
        &self,
        course_code: &str,
        course_name: &str,
        instructor: &str,
    ) -> Result<Course, DatabaseError> {
        let course_code = required_field("course_code", course_code)?;
        let course_name = required_field("course_name", course_name)?;
        let instructor = required_field("instructor", instructor)?;

        self.conn()
            .execute(
                "INSERT INTO courses (course_code, course_name, instructor) VALUES (?1, ?2, ?3)",
                libsql::params![course_code.as_str(), course_name.as_str(), instructor.as_str()],
            )
            .await?;

        let id = self.conn().last_insert_rowid();
        tracing::debug!(id, code = %course_code, "added course");

        Ok(Course {
            id,
            course_code,
            course_name,
            instructor,
        })
    }

    /// Replace every field of an existing course.
    ///
    /// # Errors
    ///
    /// `NotFound` when `id` names no row (the affected-row count is zero).
    pub async fn update_course(
        &self,
        id: i64,
        course_code: &str,
        course_name: &str,
        instructor: &str,
    ) -> Result<Course, DatabaseError> {
        let course_code = required_field("course_code", course_code)?;
        let course_name = required_field("course_name", course_name)?;
        let instructor = required_field("instructor", instructor)?;

        let affected = self
            .conn()
            .execute(
                "UPDATE courses SET course_code = ?1, course_name = ?2, instructor = ?3 \
                 WHERE id = ?4",
                libsql::params![
                    course_code.as_str(),
                    course_name.as_str(),
                    instructor.as_str(),
                    id
                ],
            )
            .await?;

        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "course",
                id,
            });
        }

        Ok(Course {
            id,
            course_code,
            course_name,
            instructor,
        })
    }

    /// Delete by id. Idempotent: an absent id is a no-op. Enrollments for
    /// the course are removed by the cascade.
    pub async fn delete_course(&self, id: i64) -> Result<(), DatabaseError> {
        self.conn()
            .execute("DELETE FROM courses WHERE id = ?1", libsql::params![id])
            .await?;
        Ok(())
    }
}
