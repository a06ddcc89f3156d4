//! Handle `rgr enrollment`.

use reg_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EnrollmentCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &EnrollmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EnrollmentCommands::List => {
            let views = ctx.db.list_enrollments().await?;
            output(&views, flags.format)
        }
        EnrollmentCommands::Add { student, course } => {
            match ctx.db.enroll(*student, *course).await {
                Ok(enrollment) => output(&enrollment, flags.format),
                // Benign outcome: report as information, exit 0.
                Err(DatabaseError::DuplicateEnrollment { .. }) => {
                    println!("student {student} is already enrolled in course {course}");
                    Ok(())
                }
                Err(error) => Err(error.into()),
            }
        }
        EnrollmentCommands::Delete { id } => {
            ctx.db.unenroll(*id).await?;
            if !flags.quiet {
                println!("deleted enrollment {id}");
            }
            Ok(())
        }
        EnrollmentCommands::Students => {
            let options = ctx.db.available_students().await?;
            output(&options, flags.format)
        }
        EnrollmentCommands::Courses => {
            let options = ctx.db.available_courses().await?;
            output(&options, flags.format)
        }
    }
}
