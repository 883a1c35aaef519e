//! `kar indent`: the generic workflow commands, with create/update routed
//! through the costing so every derived figure is sent. Updates that touch
//! costing are merged over the stored indent first.

use std::path::Path;

use anyhow::Context;
use kar_api::Resource;
use kar_api::resources::Indents;
use kar_core::costing::{IndentCostBreakdown, IndentCostInput};
use kar_core::entities::{Indent, IndentDraft};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{IndentCommands, RecordCommands, WorkflowCommands};
use crate::cli::subcommands::indent::IndentCostArgs;
use crate::commands::record;
use crate::commands::shared::body::{read_body, read_json_file};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
struct IndentSaved {
    indent: Indent,
    breakdown: IndentCostBreakdown,
}

/// Handle `kar indent`.
pub async fn handle(
    action: &IndentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IndentCommands::Cost(args) => cost(args, flags),
        IndentCommands::Workflow(WorkflowCommands::Record(RecordCommands::Create(body))) => {
            ctx.require(Indents::AREA)?;
            let draft = parse_draft(read_body(body)?)?;
            let breakdown = draft.cost.derive();
            let indent = with_spinner("creating indent", ctx.api.create_indent(draft)).await?;
            output(&IndentSaved { indent, breakdown }, flags.format)
        }
        IndentCommands::Workflow(WorkflowCommands::Record(RecordCommands::Update { id, body })) => {
            ctx.require(Indents::AREA)?;
            let body = read_body(body)?;
            let Some(changes) = body.as_object().filter(|changes| touches_costing(changes)) else {
                let indent =
                    with_spinner("updating indent", ctx.api.update::<Indents, _>(id, &body)).await?;
                return output(&indent, flags.format);
            };
            let (indent, breakdown) =
                with_spinner("updating indent", ctx.api.revise_indent(id, changes)).await?;
            output(&IndentSaved { indent, breakdown }, flags.format)
        }
        IndentCommands::Workflow(workflow) => {
            record::handle_workflow::<Indents>(workflow, ctx, flags).await
        }
    }
}

/// Handle `kar indent cost`: derive the breakdown offline.
pub fn cost(args: &IndentCostArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input: IndentCostInput = read_json_file(Path::new(&args.file))?;
    output(&input.derive(), flags.format)
}

fn parse_draft(body: serde_json::Value) -> anyhow::Result<IndentDraft> {
    serde_json::from_value(body).context("indent body does not match the indent form")
}

/// Whether an update changes any costing input. Those are merged over the
/// stored indent and re-costed; other edits are sent as they are.
fn touches_costing(changes: &serde_json::Map<String, serde_json::Value>) -> bool {
    const COST_KEYS: [&str; 8] = [
        "items",
        "skilled",
        "semiskilled",
        "profitPercent",
        "wearTearPercent",
        "roundOff",
        "gstPercent",
        "quantity",
    ];
    COST_KEYS.iter().any(|key| changes.contains_key(*key))
}
