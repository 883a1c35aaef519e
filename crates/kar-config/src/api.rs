//! Backend REST API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("karkhana/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined to (e.g. `https://erp.example.in/api`).
    #[serde(default)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Base URL without a trailing slash, checked for an http(s) scheme.
    pub fn validated_base_url(&self) -> Result<String, ConfigError> {
        let url = self.base_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "api".into(),
                hint: "KARKHANA_API__BASE_URL".into(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{url}' must start with http:// or https://"),
            });
        }
        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = ApiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("karkhana/"));
        assert!(matches!(
            config.validated_base_url(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "https://erp.example.in/api/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.validated_base_url().unwrap(),
            "https://erp.example.in/api"
        );
    }

    #[test]
    fn rejects_missing_scheme() {
        let config = ApiConfig {
            base_url: "erp.example.in".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validated_base_url(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
