use jyn_config::JynConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &JynConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &JynConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.store.is_configured() && has_single_underscore_key(&env_keys, "JYN_STORE") {
        warnings.push(
            "Store config appears default while JYN_STORE_* env vars exist. Use double underscores (example: JYN_STORE__PATH)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "JYN_GENERAL") {
        warnings.push(
            "JYN_GENERAL_* env vars are ignored. Use double underscores (example: JYN_GENERAL__LANGUAGE)."
                .to_string(),
        );
    }

    warnings
}

/// `JYN_STORE_PATH` style keys: the section joined with one underscore.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{section}_");
    let double = format!("{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}
