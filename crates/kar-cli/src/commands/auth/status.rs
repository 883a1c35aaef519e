use kar_auth::SessionStore;

use super::SessionView;
use crate::cli::GlobalFlags;
use crate::output::output;

/// Report the stored session without contacting the server.
pub fn handle(flags: &GlobalFlags, config: &kar_config::KarConfig) -> anyhow::Result<()> {
    let store = SessionStore::from_config(&config.session)?;
    let view = match store.load() {
        Some(session) if kar_auth::expiry::is_expired(&session.token) => {
            let mut view = SessionView::of(&session, store.token_source());
            view.authenticated = false;
            view.areas.clear();
            view.note = Some("token expired; run `kar auth login`".into());
            view
        }
        Some(session) => SessionView::of(&session, store.token_source()),
        None => SessionView::signed_out("no token found"),
    };
    output(&view, flags.format)
}
