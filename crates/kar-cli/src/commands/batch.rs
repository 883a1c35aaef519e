use kar_api::Resource;
use kar_api::resources::RawMaterialBatches;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BatchCommands;
use crate::commands::record;
use crate::context::AppContext;
use crate::output::output_page;
use crate::progress::with_spinner;

/// Handle `kar batch`.
pub async fn handle(
    action: &BatchCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BatchCommands::Record(inner) => {
            record::handle::<RawMaterialBatches>(inner, ctx, flags).await
        }
        BatchCommands::ForMaterial { material_id, list } => {
            ctx.require(RawMaterialBatches::AREA)?;
            let params = record::list_params(list, ctx, flags)?;
            let page = with_spinner(
                &format!("loading batches of {material_id}"),
                ctx.api.batches_for_material(material_id, params),
            )
            .await?;
            output_page(&page, flags.format)
        }
    }
}
