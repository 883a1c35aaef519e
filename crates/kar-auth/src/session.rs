//! The persisted sign-in session.
//!
//! The profile of the signed-in user is written to `session.json`; the bearer
//! token goes to the OS keychain when enabled, otherwise (or when the keychain
//! is unavailable) to a `credentials` file next to it. Both files are 0600
//! inside a 0700 directory on Unix.
//!
//! Token lookup order: keyring → `KARKHANA_AUTH__TOKEN` → credentials file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use kar_config::SessionConfig;
use kar_core::entities::User;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

const KEYRING_USER: &str = "bearer-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const PROFILE_FILE_NAME: &str = "session.json";

/// Environment variable consulted for a token when nothing is stored.
pub const TOKEN_ENV_VAR: &str = "KARKHANA_AUTH__TOKEN";

/// A signed-in session: the bearer token and, once known, the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            token: token.into(),
            user,
            saved_at: None,
        }
    }
}

/// Where the current token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

#[derive(Serialize, Deserialize)]
struct Profile {
    user: Option<User>,
    saved_at: DateTime<Utc>,
}

/// Reads and writes the session on disk.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
    keyring_service: Option<String>,
}

impl SessionStore {
    /// Store rooted at `dir`. Pass `None` to keep the token out of the keychain.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, keyring_service: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            keyring_service,
        }
    }

    /// Build a store from the `[session]` config section.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` when no directory can be resolved.
    pub fn from_config(config: &SessionConfig) -> Result<Self, AuthError> {
        let dir = config.resolved_dir().ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; set session.dir".into())
        })?;
        let service = config
            .use_keyring
            .then(|| config.keyring_service.clone());
        Ok(Self::new(dir, service))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the profile or the fallback
    /// credentials file cannot be written.
    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        self.ensure_dir()?;
        self.store_token(&session.token)?;
        let profile = Profile {
            user: session.user.clone(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&profile)
            .map_err(|e| AuthError::TokenStoreError(format!("encode profile: {e}")))?;
        write_private(&self.dir.join(PROFILE_FILE_NAME), &json)
    }

    /// Replace only the stored user profile, keeping the token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the profile cannot be written.
    pub fn save_user(&self, user: &User) -> Result<(), AuthError> {
        self.ensure_dir()?;
        let profile = Profile {
            user: Some(user.clone()),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&profile)
            .map_err(|e| AuthError::TokenStoreError(format!("encode profile: {e}")))?;
        write_private(&self.dir.join(PROFILE_FILE_NAME), &json)
    }

    /// Load the session, if a token can be found anywhere.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let (token, _) = self.load_token()?;
        let profile = fs::read_to_string(self.dir.join(PROFILE_FILE_NAME))
            .ok()
            .and_then(|raw| match serde_json::from_str::<Profile>(&raw) {
                Ok(profile) => Some(profile),
                Err(error) => {
                    tracing::warn!(%error, "ignoring unreadable session profile");
                    None
                }
            });
        let (user, saved_at) = profile.map_or((None, None), |p| (p.user, Some(p.saved_at)));
        Some(Session {
            token,
            user,
            saved_at,
        })
    }

    /// Where the current token would be loaded from.
    #[must_use]
    pub fn token_source(&self) -> Option<TokenSource> {
        self.load_token().map(|(_, source)| source)
    }

    /// Remove the token from every tier and delete the profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if a file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry() {
            let _ = entry.delete_credential();
        }
        for name in [CREDENTIALS_FILE_NAME, PROFILE_FILE_NAME] {
            let path = self.dir.join(name);
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
                })?;
            }
        }
        Ok(())
    }

    fn keyring_entry(&self) -> Option<keyring::Entry> {
        let service = self.keyring_service.as_deref()?;
        match keyring::Entry::new(service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    fn store_token(&self, token: &str) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry() {
            match entry.set_password(token) {
                Ok(()) => {
                    // Keychain now holds the token; drop any older file copy.
                    let stale = self.dir.join(CREDENTIALS_FILE_NAME);
                    if stale.exists() {
                        let _ = fs::remove_file(stale);
                    }
                    return Ok(());
                }
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                }
            }
        }
        write_private(&self.dir.join(CREDENTIALS_FILE_NAME), token)
    }

    fn load_token(&self) -> Option<(String, TokenSource)> {
        if let Some(entry) = self.keyring_entry()
            && let Ok(token) = entry.get_password()
            && !token.trim().is_empty()
        {
            return Some((token, TokenSource::Keyring));
        }

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR)
            && !token.trim().is_empty()
        {
            return Some((token, TokenSource::Env));
        }

        fs::read_to_string(self.dir.join(CREDENTIALS_FILE_NAME))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|token| (token, TokenSource::File))
    }

    fn ensure_dir(&self) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AuthError::TokenStoreError(format!("mkdir {}: {e}", self.dir.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        Ok(())
    }
}

fn write_private(path: &Path, contents: &str) -> Result<(), AuthError> {
    fs::write(path, contents)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}
