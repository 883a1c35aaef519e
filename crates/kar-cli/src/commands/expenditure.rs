use std::collections::BTreeMap;

use chrono::NaiveDate;
use kar_core::entities::{ExpenditureEntry, ExpenditureReport};
use kar_core::roles::Area;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExpenditureArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExpenditureView {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    total: Decimal,
    by_category: BTreeMap<String, Decimal>,
    entries: Vec<ExpenditureEntry>,
}

impl ExpenditureView {
    fn new(args: &ExpenditureArgs, report: ExpenditureReport) -> Self {
        Self {
            from: args.from,
            to: args.to,
            total: report.total(),
            by_category: report.by_category(),
            entries: report.entries,
        }
    }
}

/// Handle `kar expenditure [--from] [--to]`.
pub async fn handle(
    args: &ExpenditureArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        anyhow::ensure!(from <= to, "--from {from} is after --to {to}");
    }
    ctx.require(Area::Expenditure)?;
    let report = with_spinner(
        "loading expenditure",
        ctx.api.expenditure(args.from, args.to),
    )
    .await?;
    output(&ExpenditureView::new(args, report), flags.format)
}
