use std::collections::BTreeMap;

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Headline counters shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_indents: u64,
    #[serde(default)]
    pub pending_indents: u64,
    #[serde(default)]
    pub total_purchase_orders: u64,
    #[serde(default)]
    pub pending_purchase_orders: u64,
    #[serde(default)]
    pub total_grns: u64,
    #[serde(default)]
    pub low_stock_materials: u64,
    #[serde(default)]
    pub active_production: u64,
    #[serde(default)]
    pub pending_customer_orders: u64,
    #[serde(default)]
    pub total_expenditure: Decimal,
    /// Counters this client does not know about yet.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A single KPI card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
}

impl DashboardSummary {
    /// KPI cards in display order, followed by any unknown numeric counters.
    #[must_use]
    pub fn kpis(&self) -> Vec<Kpi> {
        let mut cards = vec![
            kpi("Indents", self.total_indents),
            kpi("Pending indents", self.pending_indents),
            kpi("Purchase orders", self.total_purchase_orders),
            kpi("Pending purchase orders", self.pending_purchase_orders),
            kpi("GRNs", self.total_grns),
            kpi("Low-stock materials", self.low_stock_materials),
            kpi("Active production", self.active_production),
            kpi("Pending customer orders", self.pending_customer_orders),
            kpi("Expenditure", self.total_expenditure),
        ];
        for (key, value) in &self.extra {
            if value.is_number() {
                cards.push(kpi(key, value));
            }
        }
        cards
    }
}

fn kpi(label: &str, value: impl ToString) -> Kpi {
    Kpi {
        label: label.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unknown_numeric_counters() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"totalIndents":12,"pendingIndents":3,"totalExpenditure":1500.25,"openTransits":2,"note":"x"}"#,
        )
        .unwrap();
        let cards = summary.kpis();
        assert_eq!(cards[0].value, "12");
        assert_eq!(cards[8].value, "1500.25");
        assert!(cards.iter().any(|c| c.label == "openTransits" && c.value == "2"));
        assert!(!cards.iter().any(|c| c.label == "note"));
    }
}
