//! Student directory: CRUD + substring search.

use reg_core::entities::Student;

use crate::RegDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, optional_field, required_field};

const SELECT_COLS: &str = "id, student_code, first_name, last_name, middle_name";

fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        id: row.get(0)?,
        student_code: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        middle_name: get_opt_string(row, 4)?,
    })
}

impl RegDb {
    /// All students, ordered by student code.
    pub async fn list_students(&self) -> Result<Vec<Student>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM students ORDER BY student_code"),
                (),
            )
            .await?;

        let mut students = Vec::new();
        while let Some(row) = rows.next().await? {
            students.push(row_to_student(&row)?);
        }
        Ok(students)
    }

    /// Case-insensitive substring search over code, first, last, and
    /// middle name. An empty query matches every student, so
    /// search-as-you-type degrades to the full listing at reset.
    pub async fn search_students(&self, query: &str) -> Result<Vec<Student>, DatabaseError> {
        let pattern = format!("%{}%", query.trim().to_lowercase());
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM students \
                     WHERE LOWER(student_code) LIKE ?1 OR LOWER(first_name) LIKE ?1 \
                        OR LOWER(last_name) LIKE ?1 OR LOWER(middle_name) LIKE ?1 \
                     ORDER BY student_code"
                ),
                libsql::params![pattern],
            )
            .await?;

        let mut students = Vec::new();
        while let Some(row) = rows.next().await? {
            students.push(row_to_student(&row)?);
        }
        Ok(students)
    }

    pub async fn get_student(&self, id: i64) -> Result<Student, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM students WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "student",
            id,
        })?;
        row_to_student(&row)
    }

    /// Insert a student. Code, first, and last name are required; a blank
    /// middle name is stored as NULL. A duplicate student code surfaces as
    /// the underlying constraint error, not a special case.
    pub async fn add_student(
        &self,
        student_code: &str,
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
    ) -> Result<Student, DatabaseError> {
        let student_code = required_field("student_code", student_code)?;
        let first_name = required_field("first_name", first_name)?;
        let last_name = required_field("last_name", last_name)?;
        let middle_name = optional_field(middle_name);

        self.conn()
            .execute(
                "INSERT INTO students (student_code, first_name, last_name, middle_name) \
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    student_code.as_str(),
                    first_name.as_str(),
                    last_name.as_str(),
                    middle_name.as_deref()
                ],
            )
            .await?;

        let id = self.conn().last_insert_rowid();
        tracing::debug!(id, code = %student_code, "added student");

        Ok(Student {
            id,
            student_code,
            first_name,
            last_name,
            middle_name,
        })
    }

    /// Replace every field of an existing student.
    ///
    /// # Errors
    ///
    /// `NotFound` when `id` names no row (the affected-row count is zero).
    pub async fn update_student(
        &self,
        id: i64,
        student_code: &str,
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
    ) -> Result<Student, DatabaseError> {
        let student_code = required_field("student_code", student_code)?;
        let first_name = required_field("first_name", first_name)?;
        let last_name = required_field("last_name", last_name)?;
        let middle_name = optional_field(middle_name);

        let affected = self
            .conn()
            .execute(
                "UPDATE students SET student_code = ?1, first_name = ?2, last_name = ?3, \
                 middle_name = ?4 WHERE id = ?5",
                libsql::params![
                    student_code.as_str(),
                    first_name.as_str(),
                    last_name.as_str(),
                    middle_name.as_deref(),
                    id
                ],
            )
            .await?;

        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: "student",
                id,
            });
        }

        Ok(Student {
            id,
            student_code,
            first_name,
            last_name,
            middle_name,
        })
    }

    /// Delete by id. Idempotent: an absent id is a no-op. Enrollments for
    /// the student are removed by the cascade.
    pub async fn delete_student(&self, id: i64) -> Result<(), DatabaseError> {
        self.conn()
            .execute("DELETE FROM students WHERE id = ?1", libsql::params![id])
            .await?;
        Ok(())
    }
}
