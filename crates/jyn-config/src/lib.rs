//! # jyn-config
//!
//! Layered configuration loading for jyn using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JYN_*` prefix, `__` as separator)
//! 2. Project-level `.jyn/config.toml`
//! 3. User-level `~/.config/jyn/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `JYN_STORE__PATH` -> `store.path`, `JYN_GENERAL__LANGUAGE` -> `general.language`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use jyn_config::JynConfig;
//!
//! let config = JynConfig::load_with_store_override(None).expect("config");
//! let path = config.store.resolve_path().expect("store path");
//! println!("worksheets at {}", path.display());
//! ```

mod error;
mod general;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Env prefix for every setting.
pub const ENV_PREFIX: &str = "JYN_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JynConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl JynConfig {
    /// Load configuration from all sources, with an optional store path
    /// override (the CLI's `--store`) merged above every other layer.
    ///
    /// Does NOT read `.env`; the binary loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load_with_store_override(store_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut figment = Self::figment();
        if let Some(path) = store_path {
            figment = figment.merge(Serialized::default("store.path", path));
        }
        figment.extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".jyn/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jyn").join("config.toml"))
    }
}
