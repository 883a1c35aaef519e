use clap::{Args, Subcommand};

use super::record::WorkflowCommands;

/// Indent commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IndentCommands {
    #[command(flatten)]
    Workflow(WorkflowCommands),
    /// Derive the cost breakdown of an indent form without sending it.
    Cost(IndentCostArgs),
}

#[derive(Clone, Debug, Args)]
pub struct IndentCostArgs {
    /// JSON file with items, labour, percentages and quantity.
    #[arg(long)]
    pub file: String,
}
