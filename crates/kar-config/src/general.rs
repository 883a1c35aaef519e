//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for list commands.
const fn default_limit() -> u32 {
    10
}

const fn default_cache_ttl_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// How long a cached list response is reused. `0` disables the list cache.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}
