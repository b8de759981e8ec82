use crate::cli::GlobalFlags;
use crate::cli::subcommands::SentenceCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `jyn sentence`.
pub fn handle(
    action: &SentenceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &mut ctx.service;
    match action {
        SentenceCommands::Suggest { id } => output(&service.suggestions(id)?, flags.format),
        SentenceCommands::Add { id, source, text } => {
            output(&service.add_sentence(id, text, *source)?, flags.format)
        }
        SentenceCommands::Custom { id, text } => {
            output(&service.add_custom_sentence(id, text)?, flags.format)
        }
        SentenceCommands::Toggle { id, source, text } => {
            output(&service.toggle_sentence(id, text, *source)?, flags.format)
        }
        SentenceCommands::Remove { id, sentence_id } => {
            output(&service.remove_sentence(id, sentence_id)?, flags.format)
        }
        SentenceCommands::Done { id } => output(&service.finish_selection(id)?, flags.format),
        SentenceCommands::Back { id } => output(&service.reopen_form(id)?, flags.format),
        SentenceCommands::Select { id, sentence_id } => {
            output(&service.select_sentence(id, sentence_id)?, flags.format)
        }
    }
}
