use clap::Subcommand;

/// Student directory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// List students, optionally filtered.
    List {
        /// Case-insensitive substring over code and names.
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a student.
    Add {
        #[arg(long)]
        code: String,
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
        #[arg(long)]
        middle: Option<String>,
    },
    /// Update a student (replaces every field).
    Update {
        id: i64,
        #[arg(long)]
        code: String,
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
        #[arg(long)]
        middle: Option<String>,
    },
    /// Delete a student by id (their enrollments go with them).
    Delete { id: i64 },
}
