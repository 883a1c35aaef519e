use clap::Subcommand;

use super::record::{ListArgs, RecordCommands};

/// Raw-material batch commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BatchCommands {
    #[command(flatten)]
    Record(RecordCommands),
    /// List the batches of one raw material.
    #[command(name = "for-material")]
    ForMaterial {
        material_id: String,
        #[command(flatten)]
        list: ListArgs,
    },
}
