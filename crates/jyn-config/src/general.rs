//! General application configuration.

use jyn_core::dashboard::DashboardFilter;
use jyn_core::enums::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Language of the labels written for Yes/No answers (`en` or `de`).
    #[serde(default)]
    pub language: Language,

    /// Status filter applied by `jyn list` when none is given.
    #[serde(default)]
    pub default_filter: DashboardFilter,
}
