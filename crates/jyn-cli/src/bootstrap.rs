use anyhow::Context;
use jyn_config::JynConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply `--store` on top of every other source.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<JynConfig> {
    load_dotenv()?;

    JynConfig::load_with_store_override(flags.store.as_deref())
        .context("failed to load jyn configuration")
}

/// Read `.env` from the working directory when one exists.
fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
