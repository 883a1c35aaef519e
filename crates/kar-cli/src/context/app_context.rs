use anyhow::Context;
use kar_api::ApiClient;
use kar_auth::{Session, SessionStore};
use kar_config::KarConfig;
use kar_core::roles::Area;

/// Shared application resources initialized once per command.
pub struct AppContext {
    pub config: KarConfig,
    pub session: Option<Session>,
    pub api: ApiClient,
}

impl AppContext {
    /// Load the stored session and build an API client carrying its token.
    pub fn init(config: KarConfig) -> anyhow::Result<Self> {
        let store = SessionStore::from_config(&config.session)?;
        let session = store.load();
        let api = ApiClient::from_config(&config)
            .context("cannot reach the API without a base URL")?
            .with_token(session.as_ref().map(|s| s.token.clone()));
        tracing::debug!(
            base_url = api.base_url(),
            signed_in = session.is_some(),
            "context ready"
        );
        Ok(Self {
            config,
            session,
            api,
        })
    }

    /// Check the stored session against `area` before any request is sent.
    pub fn require(&self, area: Area) -> anyhow::Result<&Session> {
        Ok(kar_auth::require(self.session.as_ref(), area)?)
    }
}
