use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RecordRef;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<RecordRef>,
    #[serde(default)]
    pub hsn_code: Option<String>,
    #[serde(default)]
    pub current_stock: Decimal,
    #[serde(default)]
    pub minimum_stock: Decimal,
    #[serde(default)]
    pub rate: Decimal,
}

impl RawMaterial {
    /// Stock at or below the reorder level. A zero reorder level never alerts.
    #[must_use]
    pub fn is_below_minimum(&self) -> bool {
        self.minimum_stock > Decimal::ZERO && self.current_stock <= self.minimum_stock
    }

    #[must_use]
    pub fn stock_value(&self) -> Decimal {
        self.current_stock * self.rate
    }
}

/// Quantity of a raw material received in one lot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialBatch {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub batch_number: Option<String>,
    #[serde(default)]
    pub raw_material: Option<RecordRef>,
    #[serde(default)]
    pub grn: Option<RecordRef>,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub remaining_quantity: Option<Decimal>,
    #[serde(default)]
    pub rate: Decimal,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub received_at: Option<DateTime<Utc>>,
}

impl RawMaterialBatch {
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.remaining_quantity.unwrap_or(self.quantity)
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() <= Decimal::ZERO
    }
}
