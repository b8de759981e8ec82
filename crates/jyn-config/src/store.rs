//! Worksheet store configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

const FILE_NAME: &str = "worksheets.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the worksheet document. Empty means the platform data dir.
    #[serde(default)]
    pub path: String,
}

impl StoreConfig {
    /// Whether an explicit path was configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }

    /// The document path: the configured one, else `<data_dir>/jyn/worksheets.json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when no path is configured and the
    /// platform has no data directory.
    pub fn resolve_path(&self) -> Result<PathBuf, ConfigError> {
        if self.is_configured() {
            return Ok(PathBuf::from(&self.path));
        }
        dirs::data_dir()
            .map(|dir| dir.join("jyn").join(FILE_NAME))
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "store.path".into(),
                reason: "no platform data directory; set JYN_STORE__PATH".into(),
            })
    }
}
