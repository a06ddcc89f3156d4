//! Handle `rgr course`.

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::List { search } => {
            let courses = match search {
                Some(query) => ctx.db.search_courses(query).await?,
                None => ctx.db.list_courses().await?,
            };
            output(&courses, flags.format)
        }
        CourseCommands::Add {
            code,
            name,
            instructor,
        } => {
            let course = ctx.db.add_course(code, name, instructor).await?;
            output(&course, flags.format)
        }
        CourseCommands::Update {
            id,
            code,
            name,
            instructor,
        } => {
            let course = ctx.db.update_course(*id, code, name, instructor).await?;
            output(&course, flags.format)
        }
        CourseCommands::Delete { id } => {
            ctx.db.delete_course(*id).await?;
            if !flags.quiet {
                println!("deleted course {id}");
            }
            Ok(())
        }
    }
}
