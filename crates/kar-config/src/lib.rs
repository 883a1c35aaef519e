//! # kar-config
//!
//! Layered configuration loading for Karkhana using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KARKHANA_*` prefix, `__` as separator)
//! 2. Project-level `.karkhana/config.toml`
//! 3. User-level `~/.config/karkhana/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KARKHANA_API__BASE_URL` -> `api.base_url`,
//! `KARKHANA_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use kar_config::KarConfig;
//!
//! let config = KarConfig::load_with_dotenv().expect("config");
//! if config.api.is_configured() {
//!     println!("backend: {}", config.api.base_url);
//! }
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "KARKHANA_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KarConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl KarConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration after reading a specific dotenv file.
    pub fn load_with_dotenv_file(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".karkhana/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("karkhana").join("config.toml"))
    }
}
