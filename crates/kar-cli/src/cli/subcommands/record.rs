use clap::{Args, Subcommand};

/// Commands every resource supports.
#[derive(Clone, Debug, Subcommand)]
pub enum RecordCommands {
    /// List one page of records.
    List(ListArgs),
    /// Get a record by ID.
    Get { id: String },
    /// Create a record from a JSON body.
    Create(BodyArgs),
    /// Update a record from a JSON body.
    Update {
        id: String,
        #[command(flatten)]
        body: BodyArgs,
    },
    /// Delete a record.
    Delete { id: String },
}

/// Commands for documents with a status workflow.
#[derive(Clone, Debug, Subcommand)]
pub enum WorkflowCommands {
    #[command(flatten)]
    Record(RecordCommands),
    /// Move a document to a new status.
    #[command(name = "set-status")]
    SetStatus { id: String, status: String },
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Page number, starting at 1.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Free-text search. Changing it starts again from page 1.
    #[arg(long)]
    pub search: Option<String>,
    /// Only records in this status.
    #[arg(long)]
    pub status: Option<String>,
    /// Page size (overrides the global --limit).
    #[arg(long = "page-size")]
    pub page_size: Option<u32>,
}

/// A JSON request body, inline or from a file.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct BodyArgs {
    /// Inline JSON object.
    #[arg(long)]
    pub data: Option<String>,
    /// Path to a JSON file.
    #[arg(long)]
    pub file: Option<String>,
}
