use std::path::Path;

use anyhow::Context;
use kar_config::KarConfig;

/// Load `.env` (if present in the working directory) and then the layered config.
pub fn load_config() -> anyhow::Result<KarConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_config_from(&cwd)
}

fn load_config_from(dir: &Path) -> anyhow::Result<KarConfig> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    KarConfig::load().context("failed to load configuration")
}
