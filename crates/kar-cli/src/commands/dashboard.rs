use kar_core::roles::Area;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `kar dashboard`. Tables show the KPI cards; JSON keeps every counter.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(Area::Dashboard)?;
    let summary = with_spinner("loading dashboard", ctx.api.dashboard()).await?;
    match flags.format {
        OutputFormat::Table => output(&summary.kpis(), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&summary, flags.format),
    }
}
