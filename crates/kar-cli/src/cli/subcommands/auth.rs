use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// End the session and clear stored credentials.
    Logout,
    /// Fetch the signed-in user from the server.
    Me,
    /// Show the locally stored session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Password. Read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}
