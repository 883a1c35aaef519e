use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, BatchCommands, IndentCommands, RecordCommands, StatusCommands,
    WorkflowCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Indents (material requisitions).
    Indent {
        #[command(subcommand)]
        action: IndentCommands,
    },
    /// Purchase orders.
    Purchase {
        #[command(subcommand)]
        action: WorkflowCommands,
    },
    /// Goods receipt notes.
    Grn {
        #[command(subcommand)]
        action: WorkflowCommands,
    },
    /// Raw materials.
    Material {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Raw-material batches.
    Batch {
        #[command(subcommand)]
        action: BatchCommands,
    },
    /// Production batches.
    Production {
        #[command(subcommand)]
        action: WorkflowCommands,
    },
    /// Vendors.
    Vendor {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Users (admin only).
    User {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Units of measure.
    Unit {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Transit register (gate entries).
    Transit {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Customer orders.
    #[command(name = "customer-order")]
    CustomerOrder {
        #[command(subcommand)]
        action: WorkflowCommands,
    },
    /// Manufacture articles and their bill of materials.
    Article {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Saleable products.
    Product {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Headline counters.
    Dashboard,
    /// Expenditure over a period.
    Expenditure(ExpenditureArgs),
    /// Status vocabulary.
    Status {
        #[command(subcommand)]
        action: StatusCommands,
    },
    /// Dump JSON schema for a record type.
    Schema(SchemaArgs),
}

/// Arguments for `kar expenditure`.
#[derive(Clone, Debug, Args)]
pub struct ExpenditureArgs {
    /// First day, YYYY-MM-DD.
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last day, YYYY-MM-DD.
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

/// Arguments for `kar schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type name (e.g. `indent`, `purchase-order`).
    pub type_name: String,
}
