use skuboard_model::{LeadTime, Table};

use crate::coerce::coerce_qty;

/// Resolve the per-SKU lead time. The target column is discovered, not
/// computed: the first column in declared order whose trimmed name contains
/// `lead` case-insensitively. Source files do not share one canonical
/// header text, only that convention.
///
/// No lead column, no identifier column, no matching row, or a cell that
/// fails coercion all resolve to [`LeadTime::Unavailable`]; absence is
/// reported, not zeroed.
pub fn resolve_lead_time(table: &Table, id_column: &str, id_value: &str) -> LeadTime {
    let Some(lead_idx) = table.column_containing("lead") else {
        return LeadTime::Unavailable;
    };
    let Some(id_idx) = table.column_index(id_column) else {
        return LeadTime::Unavailable;
    };
    let matched = table
        .rows
        .iter()
        .find(|row| row.get(id_idx).map(String::as_str) == Some(id_value));
    let Some(row) = matched else {
        return LeadTime::Unavailable;
    };
    match row.get(lead_idx).and_then(|cell| coerce_qty(cell)) {
        Some(days) => LeadTime::Days(days),
        None => LeadTime::Unavailable,
    }
}
