use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntryCommands;
use crate::commands::shared::parse::parse_question;
use crate::context::AppContext;
use crate::output::output;

/// Handle `jyn entry`.
pub fn handle(action: &EntryCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = &mut ctx.service;
    let step = match action {
        EntryCommands::Set {
            id,
            question,
            index,
            text,
        } => service.set_entry(id, parse_question(*question)?, *index, text)?,
        EntryCommands::Add { id, question } => service.add_entry(id, parse_question(*question)?)?,
        EntryCommands::Remove {
            id,
            question,
            index,
        } => service.remove_entry(id, parse_question(*question)?, *index)?,
        EntryCommands::Next { id, step } => service.form_next(id, *step)?,
        EntryCommands::Back { id, step } => service.form_back(id, *step)?,
    };
    output(&step, flags.format)
}
