use clap::Subcommand;

/// Status vocabulary commands. These never touch the network.
#[derive(Clone, Debug, Subcommand)]
pub enum StatusCommands {
    /// Show the canonical status and badge for any spelling.
    Normalize { raw: String },
    /// List the full vocabulary with badge labels and tones.
    List,
}
