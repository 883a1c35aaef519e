use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RecordRef;
use crate::status::Status;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_contact: Option<String>,
    #[serde(default)]
    pub product: Option<RecordRef>,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub rate: Decimal,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub delivery_date: Option<DateTime<Utc>>,
}

impl CustomerOrder {
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.quantity * self.rate
    }

    /// Delivery date has passed and the order is still open.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        let open = !matches!(self.status, Status::Completed | Status::Closed | Status::Rejected);
        open && self.delivery_date.is_some_and(|due| due < now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdue_only_while_open() {
        let now = Utc::now();
        let mut order: CustomerOrder = serde_json::from_str(
            r#"{"_id":"co-1","customerName":"Apex","quantity":4,"rate":250,"deliveryDate":"2020-01-01"}"#,
        )
        .unwrap();
        assert_eq!(order.amount(), Decimal::from(1000));
        assert!(order.is_overdue(now));
        order.status = Status::Completed;
        assert!(!order.is_overdue(now));
    }
}
