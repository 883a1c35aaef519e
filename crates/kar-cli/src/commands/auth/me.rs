use anyhow::Context;
use kar_api::ApiClient;
use kar_auth::{AuthError, SessionStore};

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::with_spinner;

/// Fetch the signed-in user and refresh the stored profile.
pub async fn handle(flags: &GlobalFlags, config: &kar_config::KarConfig) -> anyhow::Result<()> {
    let store = SessionStore::from_config(&config.session)?;
    let session = store.load().ok_or(AuthError::NotAuthenticated)?;
    if kar_auth::expiry::is_expired(&session.token) {
        return Err(AuthError::TokenExpired.into());
    }

    let api = ApiClient::new(&config.api)
        .context("auth me: API base URL is not configured")?
        .with_token(Some(session.token));
    let user = with_spinner("loading profile", api.me()).await?;
    store.save_user(&user)?;
    output(&user, flags.format)
}
