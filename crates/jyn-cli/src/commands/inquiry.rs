use jyn_core::enums::YesNo;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InquiryCommands;
use crate::commands::shared::parse::{parse_answer3_slot, parse_answer4_slot};
use crate::context::AppContext;
use crate::output::output;

/// Handle `jyn inquiry`.
pub fn handle(
    action: &InquiryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = &mut ctx.service;
    let step = match action {
        InquiryCommands::Answer {
            id,
            sentence_id,
            index,
            text,
        } => service.answer(id, sentence_id, *index, text)?,
        InquiryCommands::Yes {
            id,
            sentence_id,
            index,
        } => service.answer_yes_no(id, sentence_id, *index, YesNo::Yes)?,
        InquiryCommands::No {
            id,
            sentence_id,
            index,
        } => service.answer_yes_no(id, sentence_id, *index, YesNo::No)?,
        InquiryCommands::Sub3 {
            id,
            sentence_id,
            slot,
            text,
        } => service.set_answer3_sub(id, sentence_id, parse_answer3_slot(slot)?, text)?,
        InquiryCommands::Sub4 {
            id,
            sentence_id,
            slot,
            text,
        } => service.set_answer4_sub(id, sentence_id, parse_answer4_slot(slot)?, text)?,
        InquiryCommands::Next {
            id,
            sentence_id,
            index,
        } => service.next_question(id, sentence_id, *index)?,
        InquiryCommands::Prev {
            id,
            sentence_id,
            index,
        } => service.previous_question(id, sentence_id, *index)?,
    };
    output(&step, flags.format)
}
