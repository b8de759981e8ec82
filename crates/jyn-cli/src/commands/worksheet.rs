use jyn_core::dashboard::DashboardFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `jyn new`.
pub fn new(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let step = ctx.service.create_worksheet()?;
    output(&step, flags.format)
}

/// Handle `jyn list`.
pub fn list(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = match args.filter.as_deref() {
        Some(raw) => raw.parse::<DashboardFilter>()?,
        None => ctx.config.general.default_filter,
    };
    let search = args.search.as_deref().filter(|s| !s.trim().is_empty());
    let listing = ctx.service.list_worksheets(filter, search)?;
    output(&listing, flags.format)
}

/// Handle `jyn show`.
pub fn show(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.show_worksheet(id)?, flags.format)
}

/// Handle `jyn resume`.
pub fn resume(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.resume_worksheet(id)?, flags.format)
}

/// Handle `jyn delete`.
pub fn delete(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.service.delete_worksheet(id)?;
    if !response.deleted {
        tracing::warn!("No worksheet {id} to delete");
    }
    output(&response, flags.format)
}
