use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Unit of measure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "shortName")]
    pub symbol: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
