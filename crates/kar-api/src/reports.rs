//! Read-only summary endpoints: `/dashboard` and `/expenditure`.

use chrono::NaiveDate;
use kar_core::entities::{DashboardSummary, ExpenditureReport};

use crate::error::ApiError;
use crate::resource::One;
use crate::{ApiClient, encode_query, with_query};

impl ApiClient {
    /// Headline counters for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn dashboard(&self) -> Result<DashboardSummary, ApiError> {
        let one: One<DashboardSummary> = self.get_json("/dashboard").await?;
        Ok(one.into_inner())
    }

    /// Expenditure between two optional dates (inclusive, `YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn expenditure(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<ExpenditureReport, ApiError> {
        let path = with_query("/expenditure", &encode_query(&period_query(from, to)));
        let one: One<ExpenditureReport> = self.get_json(&path).await?;
        Ok(one.into_inner())
    }
}

fn period_query(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<(String, String)> {
    [("from", from), ("to", to)]
        .into_iter()
        .filter_map(|(key, date)| date.map(|d| (key.to_string(), d.format("%Y-%m-%d").to_string())))
        .collect()
}
