use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RecordRef;
use crate::status::Status;

/// Received quantity of one material against a purchase order line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrnItem {
    #[serde(default)]
    pub material: Option<RecordRef>,
    #[serde(default)]
    pub ordered_quantity: Decimal,
    #[serde(default)]
    pub received_quantity: Decimal,
    #[serde(default)]
    pub accepted_quantity: Option<Decimal>,
    #[serde(default)]
    pub rate: Decimal,
}

impl GrnItem {
    /// Accepted quantity, defaulting to everything received.
    #[must_use]
    pub fn accepted(&self) -> Decimal {
        self.accepted_quantity.unwrap_or(self.received_quantity)
    }

    #[must_use]
    pub fn rejected(&self) -> Decimal {
        (self.received_quantity - self.accepted()).max(Decimal::ZERO)
    }

    #[must_use]
    pub fn accepted_value(&self) -> Decimal {
        self.accepted() * self.rate
    }
}

/// Goods receipt note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Grn {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub grn_number: Option<String>,
    #[serde(default)]
    pub purchase_order: Option<RecordRef>,
    #[serde(default)]
    pub vendor: Option<RecordRef>,
    #[serde(default)]
    pub items: Vec<GrnItem>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub received_at: Option<DateTime<Utc>>,
}

impl Grn {
    #[must_use]
    pub fn accepted_value(&self) -> Decimal {
        self.items.iter().map(GrnItem::accepted_value).sum()
    }
}
