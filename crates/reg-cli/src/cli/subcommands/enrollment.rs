use clap::Subcommand;

/// Enrollment registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EnrollmentCommands {
    /// List enrollments joined with student and course names.
    List,
    /// Enroll a student in a course.
    Add {
        /// Student id (see `rgr enrollment students`).
        #[arg(long)]
        student: i64,
        /// Course id (see `rgr enrollment courses`).
        #[arg(long)]
        course: i64,
    },
    /// Delete an enrollment by id.
    Delete { id: i64 },
    /// Students available for enrollment, as id + label.
    Students,
    /// Courses available for enrollment, as id + label.
    Courses,
}
