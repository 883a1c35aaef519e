use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RecordRef;

/// Raw material consumed per unit of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    #[serde(default)]
    pub material: Option<RecordRef>,
    #[serde(default)]
    pub quantity: Decimal,
}

/// An article the factory knows how to manufacture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManufactureArticle {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<RecordRef>,
    #[serde(default, alias = "rawMaterials")]
    pub materials: Vec<BomLine>,
}

impl ManufactureArticle {
    /// Material needed for `quantity` articles, one entry per BOM line.
    #[must_use]
    pub fn requirement(&self, quantity: Decimal) -> Vec<(String, Decimal)> {
        self.materials
            .iter()
            .map(|line| {
                let id = line
                    .material
                    .as_ref()
                    .map_or_else(String::new, |m| m.id().to_string());
                (id, line.quantity * quantity)
            })
            .collect()
    }
}

/// A sellable finished product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "code")]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<RecordRef>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_scales_bom() {
        let article: ManufactureArticle = serde_json::from_str(
            r#"{"_id":"a-1","name":"Bracket","rawMaterials":[{"material":"rm-1","quantity":0.5},{"material":{"_id":"rm-2"},"quantity":2}]}"#,
        )
        .unwrap();
        let need = article.requirement(Decimal::from(10));
        assert_eq!(need[0], ("rm-1".to_string(), Decimal::from(5)));
        assert_eq!(need[1], ("rm-2".to_string(), Decimal::from(20)));
    }
}
