use anyhow::Context;
use jyn_config::JynConfig;
use jyn_store::{FileStore, JournalService};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: JournalService<FileStore>,
    pub config: JynConfig,
}

impl AppContext {
    /// Open the worksheet file named by `store.path`.
    pub fn init(config: JynConfig) -> anyhow::Result<Self> {
        let path = config
            .store
            .resolve_path()
            .context("failed to resolve worksheet store path")?;
        tracing::debug!("Using worksheet store at {}", path.display());

        let service = JournalService::new(FileStore::new(path), config.general.language);
        Ok(Self { service, config })
    }
}
