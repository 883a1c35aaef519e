//! Record structs for every backend resource.
//!
//! Records mirror the backend JSON: camelCase keys, `_id` accepted as `id`,
//! unknown keys ignored and missing optional keys defaulted. The client never
//! holds an authoritative copy; these are read models and request bodies.

mod catalog;
mod customer_order;
mod dashboard;
mod expenditure;
mod grn;
mod indent;
mod inventory;
mod production;
mod purchase_order;
mod transit_register;
mod unit;
mod user;
mod vendor;

pub use catalog::{BomLine, ManufactureArticle, Product};
pub use customer_order::CustomerOrder;
pub use dashboard::{DashboardSummary, Kpi};
pub use expenditure::{ExpenditureEntry, ExpenditureReport};
pub use grn::{Grn, GrnItem};
pub use indent::{Indent, IndentDraft, IndentPayload};
pub use inventory::{RawMaterial, RawMaterialBatch};
pub use production::Production;
pub use purchase_order::{PurchaseOrder, PurchaseOrderItem};
pub use transit_register::{TransitDirection, TransitRegister};
pub use unit::Unit;
pub use user::User;
pub use vendor::{Vendor, is_valid_gstin};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reference to another record, either a bare id or an embedded summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RecordRef {
    Id(String),
    Embedded {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl RecordRef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) | Self::Embedded { id, .. } => id,
        }
    }

    /// Human label: the embedded name when present, otherwise the id.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Embedded {
                name: Some(name), ..
            } => name,
            other => other.id(),
        }
    }
}

/// Lenient timestamp parsing for backend date fields.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as midnight
/// UTC). Missing, null, non-string, or unparseable values become `None`.
pub(crate) mod lenient_datetime {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw.as_str().and_then(parse))
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

}
