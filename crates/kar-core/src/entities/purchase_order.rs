use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RecordRef;
use crate::status::Status;

/// One ordered material line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItem {
    #[serde(default)]
    pub material: Option<RecordRef>,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub rate: Decimal,
    #[serde(default)]
    pub received_quantity: Decimal,
    #[serde(default)]
    pub unit: Option<String>,
}

impl PurchaseOrderItem {
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.quantity * self.rate
    }

    /// Quantity still expected, never negative.
    #[must_use]
    pub fn pending_quantity(&self) -> Decimal {
        (self.quantity - self.received_quantity).max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "poNumber")]
    pub po_number: Option<String>,
    #[serde(default)]
    pub vendor: Option<RecordRef>,
    #[serde(default)]
    pub indent: Option<RecordRef>,
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
    #[serde(default)]
    pub gst_percent: Decimal,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub expected_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PurchaseOrder {
    /// Order value before tax.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(PurchaseOrderItem::amount).sum()
    }

    /// Order value including GST.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let subtotal = self.subtotal();
        subtotal + subtotal * self.gst_percent / Decimal::ONE_HUNDRED
    }

    /// Whether every line has been fully received.
    #[must_use]
    pub fn fully_received(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.pending_quantity().is_zero())
    }
}
