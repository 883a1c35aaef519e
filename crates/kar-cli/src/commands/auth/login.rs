use std::io::{BufRead, IsTerminal};

use anyhow::Context;
use kar_api::ApiClient;
use kar_api::auth::LoginResponse;
use kar_auth::{Session, SessionStore};
use kar_config::ApiConfig;

use super::SessionView;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;
use crate::progress::with_spinner;

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &kar_config::KarConfig,
) -> anyhow::Result<()> {
    let store = SessionStore::from_config(&config.session)?;
    let api = ApiClient::from_config(config).context("auth login: API base URL is not configured")?;

    let password = match &args.password {
        Some(password) => password.clone(),
        None => read_password()?,
    };
    anyhow::ensure!(!password.is_empty(), "auth login: password is empty");

    let response = with_spinner("signing in", api.login(&args.email, &password)).await?;

    let session = with_spinner("loading profile", session_for(&config.api, response)).await?;
    store.save(&session)?;
    output(&SessionView::of(&session, store.token_source()), flags.format)
}

/// Build the session to store. Some deployments return only the token, so
/// `/auth/me` is asked who it belongs to. A session without a user would be
/// refused by every role check, so a failed profile load fails the login.
async fn session_for(api: &ApiConfig, response: LoginResponse) -> anyhow::Result<Session> {
    let user = match response.user {
        Some(user) => user,
        None => ApiClient::new(api)?
            .with_token(Some(response.token.clone()))
            .me()
            .await
            .context("auth login: signed in but the user profile could not be loaded")?,
    };
    Ok(Session::new(response.token, Some(user)))
}

/// Read the password from the first line of stdin.
fn read_password() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
