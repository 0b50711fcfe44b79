use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Sentinel rendered when a value cannot be resolved at all.
pub const NOT_AVAILABLE: &str = "NA";

/// The (date, SKU) pair a summary is resolved for. Both components are
/// drawn from the sales table's selector domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionKey {
    pub date: NaiveDate,
    pub sku: String,
}

impl SelectionKey {
    pub fn new(date: NaiveDate, sku: impl Into<String>) -> Self {
        Self {
            date,
            sku: sku.into(),
        }
    }
}

/// Per-SKU fulfillment delay in days. Unlike the quantity fields, absence
/// is reported to the user rather than zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTime {
    Days(i64),
    Unavailable,
}

impl fmt::Display for LeadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadTime::Days(days) => write!(f, "{days}"),
            LeadTime::Unavailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for LeadTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LeadTime::Days(days) => serializer.serialize_i64(*days),
            LeadTime::Unavailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// The six-field output of one resolution pass, built fresh per selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSummary {
    pub sales_qty: i64,
    pub production_qty: i64,
    pub stock_qty: i64,
    pub demand_qty: i64,
    pub norms_qty: i64,
    pub lead_time: LeadTime,
    /// First matching sales row's description, or `NA` when no row matched.
    pub description: String,
}
