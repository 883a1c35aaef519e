use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RecordRef;
use crate::status::Status;

/// A production batch run against an indent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Production {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub batch_number: Option<String>,
    #[serde(default)]
    pub article: Option<RecordRef>,
    #[serde(default)]
    pub indent: Option<RecordRef>,
    #[serde(default)]
    pub planned_quantity: Decimal,
    #[serde(default)]
    pub produced_quantity: Decimal,
    #[serde(default)]
    pub rejected_quantity: Decimal,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub supervisor: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub end_date: Option<DateTime<Utc>>,
}

impl Production {
    /// Produced share of the plan as a percentage, 0 when nothing was planned.
    #[must_use]
    pub fn completion_percent(&self) -> Decimal {
        if self.planned_quantity <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.produced_quantity * Decimal::ONE_HUNDRED / self.planned_quantity).round_dp(2)
    }
}
