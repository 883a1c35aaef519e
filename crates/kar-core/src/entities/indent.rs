use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RecordRef;
use crate::costing::{IndentCostBreakdown, IndentCostInput, Labour, MaterialLine};
use crate::status::Status;

/// A material requisition raised against an article to be manufactured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Indent {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub indent_number: Option<String>,
    #[serde(default)]
    pub article: Option<RecordRef>,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub items: Vec<MaterialLine>,
    #[serde(default)]
    pub skilled: Labour,
    #[serde(default)]
    pub semiskilled: Labour,
    #[serde(default)]
    pub profit_percent: Decimal,
    #[serde(default)]
    pub wear_tear_percent: Decimal,
    #[serde(default)]
    pub round_off: Decimal,
    #[serde(default)]
    pub gst_percent: Decimal,
    #[serde(default)]
    pub final_cost: Option<Decimal>,
    #[serde(default)]
    pub rate_per_qty: Option<Decimal>,
    #[serde(default)]
    pub requested_by: Option<RecordRef>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::lenient_datetime::deserialize")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Indent {
    /// Rebuild the costing inputs stored on this indent.
    #[must_use]
    pub fn cost_input(&self) -> IndentCostInput {
        IndentCostInput {
            items: self.items.clone(),
            skilled: self.skilled,
            semiskilled: self.semiskilled,
            profit_percent: self.profit_percent,
            wear_tear_percent: self.wear_tear_percent,
            round_off: self.round_off,
            gst_percent: self.gst_percent,
            quantity: self.quantity,
        }
    }

    /// The form fields as they are stored on this indent.
    #[must_use]
    pub fn draft(&self) -> IndentDraft {
        IndentDraft {
            article: self.article.as_ref().map(|article| article.id().to_string()),
            remarks: self.remarks.clone(),
            cost: self.cost_input(),
        }
    }

    /// Lay the keys of a partial edit over the stored form fields.
    ///
    /// Keys the edit leaves out keep their stored values, so an edit of
    /// `quantity` alone still carries every material line and labour grade.
    ///
    /// # Errors
    ///
    /// Returns an error when a changed key does not fit the indent form.
    pub fn revise(
        &self,
        changes: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<IndentDraft, serde_json::Error> {
        let mut form = serde_json::to_value(self.draft())?;
        if let Some(form) = form.as_object_mut() {
            for (key, value) in changes {
                form.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(form)
    }
}

/// Indent as entered in the create/edit form, before costing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndentDraft {
    #[serde(default)]
    pub article: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(flatten)]
    pub cost: IndentCostInput,
}

/// Request body for creating or updating an indent: the form inputs plus
/// every derived figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(flatten)]
    pub cost: IndentCostInput,
    #[serde(flatten)]
    pub breakdown: IndentCostBreakdown,
}

impl From<IndentDraft> for IndentPayload {
    fn from(draft: IndentDraft) -> Self {
        let breakdown = draft.cost.derive();
        Self {
            article: draft.article,
            remarks: draft.remarks,
            cost: draft.cost,
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_backend_indent() {
        let indent: Indent = serde_json::from_str(
            r#"{
                "_id": "ind-1",
                "indentNumber": "IND/24/001",
                "article": {"_id": "art-9", "name": "Gear housing"},
                "quantity": 10,
                "status": "in-progress",
                "items": [{"materialId": "rm-1", "rate": 50, "weight": 4}],
                "skilled": {"persons": 1, "rate": 600},
                "gstPercent": 18,
                "createdAt": "2024-04-01T09:00:00Z",
                "someFutureField": true
            }"#,
        )
        .unwrap();
        assert_eq!(indent.id, "ind-1");
        assert_eq!(indent.status, Status::InProgress);
        assert_eq!(indent.article.as_ref().map(RecordRef::label), Some("Gear housing"));
        let breakdown = indent.cost_input().derive();
        assert_eq!(breakdown.base_total, Decimal::from(800));
        assert!(indent.created_at.is_some());
        assert!(indent.updated_at.is_none());
    }

    fn stored() -> Indent {
        serde_json::from_str(
            r#"{
                "_id": "ind-4",
                "article": {"_id": "art-9", "name": "Gear housing"},
                "quantity": 2,
                "items": [{"materialId": "rm-1", "rate": 50, "weight": 4}],
                "skilled": {"persons": 1, "rate": 600},
                "profitPercent": 10,
                "gstPercent": 18,
                "remarks": "rush"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn revise_keeps_stored_fields_the_edit_omits() {
        let changes = serde_json::json!({"quantity": 4});
        let draft = stored().revise(changes.as_object().unwrap()).unwrap();
        assert_eq!(draft.article.as_deref(), Some("art-9"));
        assert_eq!(draft.remarks.as_deref(), Some("rush"));
        assert_eq!(draft.cost.quantity, Decimal::from(4));
        assert_eq!(draft.cost.items.len(), 1);
        assert_eq!(draft.cost.skilled.rate, Decimal::from(600));

        let payload = IndentPayload::from(draft);
        // (200 + 600) × 1.10 × 1.18
        assert_eq!(payload.breakdown.final_cost, "1038.4".parse::<Decimal>().unwrap());
        assert_eq!(payload.breakdown.rate_per_qty, "259.6".parse::<Decimal>().unwrap());
    }

    #[test]
    fn revise_replaces_changed_lines() {
        let changes = serde_json::json!({"items": [{"rate": 5, "weight": 2}]});
        let draft = stored().revise(changes.as_object().unwrap()).unwrap();
        assert_eq!(draft.cost.derive().total_material_value, Decimal::from(10));
        assert_eq!(draft.cost.gst_percent, Decimal::from(18));
    }

    #[test]
    fn revise_rejects_values_outside_the_form() {
        let changes = serde_json::json!({"quantity": "a lot"});
        assert!(stored().revise(changes.as_object().unwrap()).is_err());
    }

    #[test]
    fn payload_carries_inputs_and_derived_figures() {
        let draft: IndentDraft = serde_json::from_str(
            r#"{"article":"art-9","items":[{"rate":10,"weight":3}],"quantity":3}"#,
        )
        .unwrap();
        let payload = IndentPayload::from(draft);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["article"], "art-9");
        assert_eq!(json["items"][0]["rate"], 10.0);
        assert_eq!(json["finalCost"], 30.0);
        assert_eq!(json["ratePerQty"], 10.0);
        assert!(json.get("remarks").is_none());
    }
}
