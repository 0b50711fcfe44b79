use chrono::NaiveDate;
use serde::Serialize;

use skuboard_model::ResolvedSummary;

/// One resolved report, ready to render as a table or JSON.
#[derive(Debug, Serialize)]
pub struct ReportResult {
    pub date: NaiveDate,
    pub sku: String,
    #[serde(flatten)]
    pub summary: ResolvedSummary,
}
