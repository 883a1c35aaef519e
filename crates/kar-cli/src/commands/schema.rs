use kar_core::costing::{IndentCostBreakdown, IndentCostInput};
use kar_core::entities::{
    CustomerOrder, DashboardSummary, ExpenditureReport, Grn, Indent, IndentDraft,
    ManufactureArticle, Product, Production, PurchaseOrder, RawMaterial, RawMaterialBatch,
    TransitRegister, Unit, User, Vendor,
};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names `kar schema` knows, in help order.
pub const SCHEMA_TYPES: [&str; 18] = [
    "indent",
    "indent-draft",
    "indent-cost",
    "indent-cost-breakdown",
    "purchase-order",
    "grn",
    "raw-material",
    "batch",
    "production",
    "vendor",
    "user",
    "unit",
    "transit",
    "customer-order",
    "article",
    "product",
    "expenditure",
    "dashboard",
];

/// Handle `kar schema <type>`: print the JSON Schema of a record type.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_of(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_of(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let key = type_name.trim().to_ascii_lowercase().replace('_', "-");
    let schema = match key.as_str() {
        "indent" => schema_for!(Indent),
        "indent-draft" => schema_for!(IndentDraft),
        "indent-cost" => schema_for!(IndentCostInput),
        "indent-cost-breakdown" => schema_for!(IndentCostBreakdown),
        "purchase-order" | "purchase" => schema_for!(PurchaseOrder),
        "grn" => schema_for!(Grn),
        "raw-material" | "material" => schema_for!(RawMaterial),
        "batch" => schema_for!(RawMaterialBatch),
        "production" => schema_for!(Production),
        "vendor" => schema_for!(Vendor),
        "user" => schema_for!(User),
        "unit" => schema_for!(Unit),
        "transit" => schema_for!(TransitRegister),
        "customer-order" => schema_for!(CustomerOrder),
        "article" => schema_for!(ManufactureArticle),
        "product" => schema_for!(Product),
        "expenditure" => schema_for!(ExpenditureReport),
        "dashboard" => schema_for!(DashboardSummary),
        _ => anyhow::bail!(
            "unknown type '{type_name}': expected one of {}",
            SCHEMA_TYPES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}
