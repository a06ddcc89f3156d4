use clap::Subcommand;

/// Course catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// List courses, optionally filtered.
    List {
        /// Case-insensitive substring over code and name.
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a course.
    Add {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        instructor: String,
    },
    /// Update a course (replaces every field).
    Update {
        id: i64,
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        instructor: String,
    },
    /// Delete a course by id (its enrollments go with it).
    Delete { id: i64 },
}
