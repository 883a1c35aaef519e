use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whether a vehicle brought material in or took it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransitDirection {
    #[default]
    #[serde(alias = "IN", alias = "In")]
    Inward,
    #[serde(alias = "OUT", alias = "Out")]
    Outward,
}

/// Gate entry for material moving through the factory gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitRegister {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub direction: TransitDirection,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub from_location: Option<String>,
    #[serde(default)]
    pub to_location: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub entry_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub exit_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl TransitRegister {
    /// Vehicle is inside the gate: entered and not yet left.
    #[must_use]
    pub const fn is_on_premises(&self) -> bool {
        self.entry_time.is_some() && self.exit_time.is_none()
    }
}
