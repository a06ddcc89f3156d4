//! Handle `rgr student`.

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::List { search } => {
            let students = match search {
                Some(query) => ctx.db.search_students(query).await?,
                None => ctx.db.list_students().await?,
            };
            output(&students, flags.format)
        }
        StudentCommands::Add {
            code,
            first,
            last,
            middle,
        } => {
            let student = ctx
                .db
                .add_student(code, first, last, middle.as_deref())
                .await?;
            output(&student, flags.format)
        }
        StudentCommands::Update {
            id,
            code,
            first,
            last,
            middle,
        } => {
            let student = ctx
                .db
                .update_student(*id, code, first, last, middle.as_deref())
                .await?;
            output(&student, flags.format)
        }
        StudentCommands::Delete { id } => {
            ctx.db.delete_student(*id).await?;
            if !flags.quiet {
                println!("deleted student {id}");
            }
            Ok(())
        }
    }
}
