//! Where the signed-in session is kept.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const fn default_use_keyring() -> bool {
    true
}

fn default_keyring_service() -> String {
    "karkhana-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Store the bearer token in the OS keychain (file fallback otherwise).
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,

    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Directory for `session.json`. Empty means `~/.karkhana`.
    #[serde(default)]
    pub dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            use_keyring: default_use_keyring(),
            keyring_service: default_keyring_service(),
            dir: String::new(),
        }
    }
}

impl SessionConfig {
    /// Resolved session directory, `None` when no home directory exists.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if !self.dir.trim().is_empty() {
            return Some(PathBuf::from(self.dir.trim()));
        }
        dirs::home_dir().map(|home| home.join(".karkhana"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = SessionConfig {
            dir: "/tmp/kar-session".into(),
            ..Default::default()
        };
        assert_eq!(config.resolved_dir(), Some(PathBuf::from("/tmp/kar-session")));
    }

    #[test]
    fn defaults_use_keyring() {
        let config = SessionConfig::default();
        assert!(config.use_keyring);
        assert_eq!(config.keyring_service, "karkhana-cli");
    }
}
