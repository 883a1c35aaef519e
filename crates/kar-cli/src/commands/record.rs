//! Generic handlers shared by every resource command group.

use kar_api::{Resource, WorkflowResource};
use kar_core::pagination::ListParams;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ListArgs, RecordCommands, WorkflowCommands};
use crate::commands::shared::body::read_body;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_status;
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;

#[derive(Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

/// Handle `kar <resource> list|get|create|update|delete`.
pub async fn handle<R: Resource>(
    action: &RecordCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require(R::AREA)?;

    match action {
        RecordCommands::List(args) => {
            let params = list_params(args, ctx, flags)?;
            let page = with_spinner(
                &format!("loading {} list", R::NAME),
                ctx.api.list::<R>(&params),
            )
            .await?;
            output_page(&page, flags.format)
        }
        RecordCommands::Get { id } => {
            let record = with_spinner(&format!("loading {} {id}", R::NAME), ctx.api.get::<R>(id))
                .await?;
            output(&record, flags.format)
        }
        RecordCommands::Create(body) => {
            let body = read_body(body)?;
            let record = with_spinner(
                &format!("creating {}", R::NAME),
                ctx.api.create::<R, _>(&body),
            )
            .await?;
            output(&record, flags.format)
        }
        RecordCommands::Update { id, body } => {
            let body = read_body(body)?;
            let record = with_spinner(
                &format!("updating {} {id}", R::NAME),
                ctx.api.update::<R, _>(id, &body),
            )
            .await?;
            output(&record, flags.format)
        }
        RecordCommands::Delete { id } => {
            with_spinner(&format!("deleting {} {id}", R::NAME), ctx.api.delete::<R>(id)).await?;
            output(&DeleteResponse { id, deleted: true }, flags.format)
        }
    }
}

/// Handle a resource group that also supports `set-status`.
pub async fn handle_workflow<R: WorkflowResource>(
    action: &WorkflowCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WorkflowCommands::Record(inner) => handle::<R>(inner, ctx, flags).await,
        WorkflowCommands::SetStatus { id, status } => {
            ctx.require(R::AREA)?;
            let to = parse_status(status)?;
            let record = with_spinner(
                &format!("moving {} {id} to {to}", R::NAME),
                ctx.api.set_status::<R>(id, to),
            )
            .await?;
            output(&record, flags.format)
        }
    }
}

/// Build list parameters from `--page`, `--page-size`, `--search` and `--status`.
pub fn list_params(
    args: &ListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<ListParams> {
    build_list_params(args, flags.limit, ctx.config.general.default_limit)
}

fn build_list_params(
    args: &ListArgs,
    global_limit: Option<u32>,
    default_limit: u32,
) -> anyhow::Result<ListParams> {
    let limit = effective_limit(args.page_size, global_limit, default_limit);
    let status = args.status.as_deref().map(parse_status).transpose()?;
    Ok(ListParams::new(1, limit)
        .with_search(args.search.as_deref())
        .with_status(status)
        .with_page(args.page))
}
