use kar_config::KarConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &KarConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &KarConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_single_underscore_key(&env_keys, "KARKHANA_API") {
        warnings.push(
            "API config appears default while KARKHANA_API* env vars exist. Use double underscores (example: KARKHANA_API__BASE_URL)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "KARKHANA_AUTH") {
        warnings.push(
            "KARKHANA_AUTH* env var found with a single underscore. The token variable is KARKHANA_AUTH__TOKEN."
                .to_string(),
        );
    }

    warnings
}

/// True when a key starts with `prefix` but not with `prefix__`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}
