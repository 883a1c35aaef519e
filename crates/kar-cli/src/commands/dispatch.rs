use kar_api::resources::{
    CustomerOrders, Grns, ManufactureArticles, Productions, Products, PurchaseOrders,
    RawMaterials, TransitRegisters, Units, Users, Vendors,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::{self, record};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Indent { action } => commands::indent::handle(&action, ctx, flags).await,
        Commands::Purchase { action } => {
            record::handle_workflow::<PurchaseOrders>(&action, ctx, flags).await
        }
        Commands::Grn { action } => record::handle_workflow::<Grns>(&action, ctx, flags).await,
        Commands::Production { action } => {
            record::handle_workflow::<Productions>(&action, ctx, flags).await
        }
        Commands::CustomerOrder { action } => {
            record::handle_workflow::<CustomerOrders>(&action, ctx, flags).await
        }
        Commands::Material { action } => record::handle::<RawMaterials>(&action, ctx, flags).await,
        Commands::Batch { action } => commands::batch::handle(&action, ctx, flags).await,
        Commands::Vendor { action } => record::handle::<Vendors>(&action, ctx, flags).await,
        Commands::User { action } => record::handle::<Users>(&action, ctx, flags).await,
        Commands::Unit { action } => record::handle::<Units>(&action, ctx, flags).await,
        Commands::Transit { action } => {
            record::handle::<TransitRegisters>(&action, ctx, flags).await
        }
        Commands::Article { action } => {
            record::handle::<ManufactureArticles>(&action, ctx, flags).await
        }
        Commands::Product { action } => record::handle::<Products>(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Expenditure(args) => commands::expenditure::handle(&args, ctx, flags).await,
        Commands::Auth { .. } | Commands::Status { .. } | Commands::Schema(_) => {
            unreachable!("auth/status/schema are pre-dispatched in main")
        }
    }
}
