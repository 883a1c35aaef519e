use kar_api::ApiClient;
use kar_auth::SessionStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    cleared: bool,
    server_notified: bool,
}

/// Clear the local session. Telling the server is best-effort.
pub async fn handle(flags: &GlobalFlags, config: &kar_config::KarConfig) -> anyhow::Result<()> {
    let store = SessionStore::from_config(&config.session)?;
    let session = store.load();

    let mut server_notified = false;
    if let Some(session) = session.as_ref().filter(|_| config.api.is_configured()) {
        match ApiClient::new(&config.api) {
            Ok(api) => match api.with_token(Some(session.token.clone())).logout().await {
                Ok(()) => server_notified = true,
                Err(error) => tracing::warn!(%error, "server logout failed; clearing locally"),
            },
            Err(error) => tracing::warn!(%error, "cannot build API client; clearing locally"),
        }
    }

    store.clear()?;
    output(
        &LogoutResponse {
            cleared: session.is_some(),
            server_notified,
        },
        flags.format,
    )
}
