use clap::Subcommand;

use crate::cli::subcommands::{CourseCommands, EnrollmentCommands, StudentCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Student directory.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Course catalog.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Enrollment registry.
    Enrollment {
        #[command(subcommand)]
        action: EnrollmentCommands,
    },
}
