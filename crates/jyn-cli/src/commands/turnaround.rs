use jyn_core::enums::TurnaroundType;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TurnaroundCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `jyn turnaround`.
pub fn handle(
    action: &TurnaroundCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &mut ctx.service;
    match action {
        TurnaroundCommands::Add {
            id,
            sentence_id,
            kind,
        } => {
            let kind = parse_enum::<TurnaroundType>(kind, "turnaround type")?;
            output(&service.add_turnaround(id, sentence_id, kind)?, flags.format)
        }
        TurnaroundCommands::Text {
            id,
            sentence_id,
            turnaround_id,
            text,
        } => output(
            &service.set_turnaround_text(id, sentence_id, turnaround_id, text)?,
            flags.format,
        ),
        TurnaroundCommands::Example {
            id,
            sentence_id,
            turnaround_id,
            text,
        } => output(
            &service.add_example(id, sentence_id, turnaround_id, text)?,
            flags.format,
        ),
        TurnaroundCommands::DropExample {
            id,
            sentence_id,
            turnaround_id,
            index,
        } => output(
            &service.remove_example(id, sentence_id, turnaround_id, *index)?,
            flags.format,
        ),
        TurnaroundCommands::Remove {
            id,
            sentence_id,
            turnaround_id,
        } => output(
            &service.remove_turnaround(id, sentence_id, turnaround_id)?,
            flags.format,
        ),
        TurnaroundCommands::Done { id, sentence_id } => {
            output(&service.finish_turnarounds(id, sentence_id)?, flags.format)
        }
        TurnaroundCommands::Back { id, sentence_id } => {
            output(&service.back_to_inquiry(id, sentence_id)?, flags.format)
        }
    }
}
