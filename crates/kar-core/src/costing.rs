//! Indent cost derivation.
//!
//! An indent is costed from its material lines, two labour grades, and a
//! handful of percentages. The derivation is recomputed on every edit and
//! only its inputs and resulting figures are sent to the backend.
//!
//! ```text
//! item.value            = rate × weight
//! total_material_value  = Σ item.value
//! total_wages           = skilled.persons × skilled.rate + semiskilled.persons × semiskilled.rate
//! base_total            = total_material_value + total_wages
//! profit_amount         = base_total × profit% / 100
//! wear_tear_amount      = base_total × wear_tear% / 100
//! total_before_round    = base_total + profit_amount + wear_tear_amount
//! total_production_cost = total_before_round + round_off
//! gst_amount            = total_production_cost × gst% / 100
//! final_cost            = total_production_cost + gst_amount
//! rate_per_qty          = final_cost / quantity   (0 when quantity ≤ 0)
//! ```
//!
//! Arithmetic saturates at the bounds of [`Decimal`], so absurdly large
//! inputs yield `Decimal::MAX` (or `MIN`) instead of failing.

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// One material line of an indent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLine {
    #[serde(default)]
    pub material_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rate: Decimal,
    #[serde(default)]
    pub weight: Decimal,
}

impl MaterialLine {
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.rate.saturating_mul(self.weight)
    }
}

/// Head count and daily rate for one labour grade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Labour {
    #[serde(default)]
    pub persons: Decimal,
    #[serde(default)]
    pub rate: Decimal,
}

impl Labour {
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.persons.saturating_mul(self.rate)
    }
}

/// Every input the indent costing form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndentCostInput {
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
    /// Signed manual adjustment applied before GST.
    #[serde(default)]
    pub round_off: Decimal,
    #[serde(default)]
    pub gst_percent: Decimal,
    #[serde(default)]
    pub quantity: Decimal,
}

/// Every figure derived from an [`IndentCostInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndentCostBreakdown {
    pub item_values: Vec<Decimal>,
    pub total_material_value: Decimal,
    pub skilled_value: Decimal,
    pub semiskilled_value: Decimal,
    pub total_wages: Decimal,
    pub base_total: Decimal,
    pub profit_amount: Decimal,
    pub wear_tear_amount: Decimal,
    pub total_before_round: Decimal,
    pub total_production_cost: Decimal,
    pub gst_amount: Decimal,
    pub final_cost: Decimal,
    pub rate_per_qty: Decimal,
}

impl IndentCostInput {
    /// Derive the full cost breakdown.
    #[must_use]
    pub fn derive(&self) -> IndentCostBreakdown {
        let item_values: Vec<Decimal> = self.items.iter().map(MaterialLine::value).collect();
        let total_material_value = item_values
            .iter()
            .fold(Decimal::ZERO, |sum, value| sum.saturating_add(*value));

        let skilled_value = self.skilled.value();
        let semiskilled_value = self.semiskilled.value();
        let total_wages = skilled_value.saturating_add(semiskilled_value);

        let base_total = total_material_value.saturating_add(total_wages);
        let profit_amount = percent_of(base_total, self.profit_percent);
        let wear_tear_amount = percent_of(base_total, self.wear_tear_percent);
        let total_before_round = base_total
            .saturating_add(profit_amount)
            .saturating_add(wear_tear_amount);
        let total_production_cost = total_before_round.saturating_add(self.round_off);
        let gst_amount = percent_of(total_production_cost, self.gst_percent);
        let final_cost = total_production_cost.saturating_add(gst_amount);
        let rate_per_qty = if self.quantity > Decimal::ZERO {
            saturating_div(final_cost, self.quantity)
        } else {
            Decimal::ZERO
        };

        IndentCostBreakdown {
            item_values,
            total_material_value,
            skilled_value,
            semiskilled_value,
            total_wages,
            base_total,
            profit_amount,
            wear_tear_amount,
            total_before_round,
            total_production_cost,
            gst_amount,
            final_cost,
            rate_per_qty,
        }
    }
}

fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    saturating_div(amount.saturating_mul(percent), HUNDRED)
}

fn saturating_div(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_div(rhs).unwrap_or(
        if lhs.is_sign_negative() == rhs.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn d(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    fn sample() -> IndentCostInput {
        IndentCostInput {
            items: vec![
                MaterialLine {
                    rate: d("120"),
                    weight: d("2.5"),
                    ..Default::default()
                },
                MaterialLine {
                    rate: d("80"),
                    weight: d("1.25"),
                    ..Default::default()
                },
            ],
            skilled: Labour {
                persons: d("2"),
                rate: d("700"),
            },
            semiskilled: Labour {
                persons: d("3"),
                rate: d("450"),
            },
            profit_percent: d("10"),
            wear_tear_percent: d("5"),
            round_off: d("-0.5"),
            gst_percent: d("18"),
            quantity: d("4"),
        }
    }

    #[test]
    fn derives_every_figure() {
        let out = sample().derive();
        assert_eq!(out.item_values, vec![d("300"), d("100")]);
        assert_eq!(out.total_material_value, d("400"));
        assert_eq!(out.skilled_value, d("1400"));
        assert_eq!(out.semiskilled_value, d("1350"));
        assert_eq!(out.total_wages, d("2750"));
        assert_eq!(out.base_total, d("3150"));
        assert_eq!(out.profit_amount, d("315"));
        assert_eq!(out.wear_tear_amount, d("157.5"));
        assert_eq!(out.total_before_round, d("3622.5"));
        assert_eq!(out.total_production_cost, d("3622"));
        assert_eq!(out.gst_amount, d("651.96"));
        assert_eq!(out.final_cost, d("4273.96"));
        assert_eq!(out.rate_per_qty, d("1068.49"));
    }

    #[rstest]
    #[case("0", "0")]
    #[case("1", "0")]
    #[case("0", "1")]
    #[case("12.5", "3.2")]
    #[case("999.99", "0.001")]
    fn line_value_is_rate_times_weight(#[case] rate: &str, #[case] weight: &str) {
        let line = MaterialLine {
            rate: d(rate),
            weight: d(weight),
            ..Default::default()
        };
        assert_eq!(line.value(), d(rate) * d(weight));
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    fn rate_per_qty_is_zero_without_positive_quantity(#[case] quantity: &str) {
        let input = IndentCostInput {
            quantity: d(quantity),
            ..sample()
        };
        let out = input.derive();
        assert_eq!(out.rate_per_qty, Decimal::ZERO);
        assert!(out.final_cost > Decimal::ZERO);
    }

    #[test]
    fn empty_input_derives_zeroes() {
        let out = IndentCostInput::default().derive();
        assert!(out.item_values.is_empty());
        assert_eq!(out.final_cost, Decimal::ZERO);
        assert_eq!(out.rate_per_qty, Decimal::ZERO);
    }

    #[test]
    fn derivation_is_idempotent() {
        let input = sample();
        assert_eq!(input.derive(), input.derive());
    }

    #[test]
    fn round_off_is_applied_before_gst() {
        let mut input = IndentCostInput {
            items: vec![MaterialLine {
                rate: d("100"),
                weight: d("1"),
                ..Default::default()
            }],
            gst_percent: d("10"),
            round_off: d("10"),
            ..Default::default()
        };
        assert_eq!(input.derive().final_cost, d("121"));
        input.round_off = d("-10");
        assert_eq!(input.derive().final_cost, d("99"));
    }

    #[test]
    fn huge_inputs_saturate_instead_of_overflowing() {
        let input = IndentCostInput {
            items: vec![MaterialLine {
                rate: d("100000000000000000"),
                weight: d("1000000000000"),
                ..Default::default()
            }],
            gst_percent: d("18"),
            quantity: d("1"),
            ..Default::default()
        };
        let out = input.derive();
        assert_eq!(out.item_values, vec![Decimal::MAX]);
        assert_eq!(out.total_material_value, Decimal::MAX);
        assert_eq!(out.final_cost, Decimal::MAX);
        assert_eq!(out.rate_per_qty, Decimal::MAX);
    }

    #[test]
    fn tiny_quantity_saturates_rate_per_qty() {
        let input = IndentCostInput {
            items: vec![MaterialLine {
                rate: d("10000000000000000000000000"),
                weight: d("1"),
                ..Default::default()
            }],
            quantity: d("0.0001"),
            ..Default::default()
        };
        assert_eq!(input.derive().rate_per_qty, Decimal::MAX);
    }

    #[test]
    fn negative_round_off_saturates_low() {
        let input = IndentCostInput {
            round_off: Decimal::MIN,
            skilled: Labour {
                persons: d("-1"),
                rate: d("1"),
            },
            ..Default::default()
        };
        assert_eq!(input.derive().final_cost, Decimal::MIN);
    }

    #[test]
    fn reads_camel_case_form_json() {
        let input: IndentCostInput = serde_json::from_str(
            r#"{
                "items": [{"rate": 10, "weight": 2}],
                "skilled": {"persons": 1, "rate": 5},
                "profitPercent": 10,
                "wearTearPercent": 0,
                "roundOff": 0,
                "gstPercent": 0,
                "quantity": 2
            }"#,
        )
        .unwrap();
        let out = input.derive();
        assert_eq!(out.base_total, d("25"));
        assert_eq!(out.final_cost, d("27.5"));
        assert_eq!(out.rate_per_qty, d("13.75"));
    }
}
