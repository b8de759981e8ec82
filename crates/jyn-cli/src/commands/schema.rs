use jyn_core::entities::Worksheet;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `jyn schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Worksheet);
    output(&schema, flags.format)
}
