use anyhow::Context;
use clap::Parser;
use kar_api::ApiError;
use kar_auth::AuthError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

use cli::subcommands::IndentCommands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("kar error: {}", describe(&error));
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    // Offline commands: no config, no session, no network.
    match &cli.command {
        cli::Commands::Status { action } => return commands::status::handle(action, &flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        cli::Commands::Indent {
            action: IndentCommands::Cost(args),
        } => return commands::indent::cost(args, &flags),
        _ => {}
    }

    let config = bootstrap::load_config()?;

    if let cli::Commands::Auth { action } = &cli.command {
        return commands::auth::handle(action, &flags, &config).await;
    }

    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config)
        .context("failed to initialize karkhana application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("KARKHANA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// One line for the user. API failures show the normalized message; auth
/// failures get a hint on how to recover.
fn describe(error: &anyhow::Error) -> String {
    if let Some(api) = error.chain().find_map(|e| e.downcast_ref::<ApiError>()) {
        return match api {
            ApiError::Unauthorized { .. } => {
                format!("{} (run `kar auth login`)", api.user_message())
            }
            _ => api.user_message(),
        };
    }
    if let Some(auth) = error.chain().find_map(|e| e.downcast_ref::<AuthError>()) {
        return match auth {
            AuthError::NotAuthenticated | AuthError::TokenExpired => {
                format!("{auth} (run `kar auth login`)")
            }
            _ => auth.to_string(),
        };
    }
    format!("{error:#}")
}
