use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One spend line reported by the expenditure endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenditureEntry {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub date: Option<DateTime<Utc>>,
}

/// Expenditure over a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenditureReport {
    #[serde(default, alias = "totalExpenditure")]
    pub total: Option<Decimal>,
    #[serde(default, alias = "data", alias = "items", alias = "breakdown")]
    pub entries: Vec<ExpenditureEntry>,
}

impl ExpenditureReport {
    /// Reported total, or the sum of entries when the backend omits it.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
            .unwrap_or_else(|| self.entries.iter().map(|e| e.amount).sum())
    }

    /// Spend per category, sorted by category name.
    #[must_use]
    pub fn by_category(&self) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for entry in &self.entries {
            let key = if entry.category.trim().is_empty() {
                "uncategorized".to_string()
            } else {
                entry.category.trim().to_string()
            };
            *totals.entry(key).or_insert(Decimal::ZERO) += entry.amount;
        }
        totals
    }
}
