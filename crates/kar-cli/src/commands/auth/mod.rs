mod login;
mod logout;
mod me;
mod status;

use chrono::{DateTime, Utc};
use kar_auth::{Session, TokenSource, accessible_areas};
use kar_core::roles::Area;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `kar auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &kar_config::KarConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags, config).await,
        AuthCommands::Me => me::handle(flags, config).await,
        AuthCommands::Status => status::handle(flags, config),
    }
}

/// What `login` and `status` report about a session.
#[derive(Debug, Serialize)]
struct SessionView {
    authenticated: bool,
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    areas: Vec<Area>,
    expires_at: Option<DateTime<Utc>>,
    token_source: Option<TokenSource>,
    note: Option<String>,
}

impl SessionView {
    fn signed_out(note: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            user_id: None,
            name: None,
            email: None,
            role: None,
            areas: Vec::new(),
            expires_at: None,
            token_source: None,
            note: Some(note.into()),
        }
    }

    fn of(session: &Session, token_source: Option<TokenSource>) -> Self {
        let user = session.user.as_ref();
        Self {
            authenticated: true,
            user_id: user.map(|u| u.id.clone()),
            name: user.map(|u| u.name.clone()).filter(|n| !n.is_empty()),
            email: user.map(|u| u.email.clone()).filter(|e| !e.is_empty()),
            role: user.map(|u| u.role.clone()),
            areas: accessible_areas(session),
            expires_at: kar_auth::expiry::decode_expiry(&session.token).ok(),
            token_source,
            note: user
                .is_none()
                .then(|| "no user profile stored; run `kar auth me`".to_string()),
        }
    }
}
