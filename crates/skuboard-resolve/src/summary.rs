use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use skuboard_model::source::columns;
use skuboard_model::{NOT_AVAILABLE, ResolvedSummary, SelectionKey, Table};

use crate::accessor::{Predicate, select, sum_column};
use crate::dates::{parse_date, pivot_column_key};
use crate::lead_time::resolve_lead_time;
use crate::pivot::resolve_cell;

/// Borrowed view of the six loaded tables. The resolution core never loads
/// anything itself; tables always arrive as parameters.
#[derive(Debug, Clone, Copy)]
pub struct SourceTables<'a> {
    pub sales: &'a Table,
    pub production: &'a Table,
    pub stock: &'a Table,
    pub demand: &'a Table,
    pub norms: &'a Table,
    pub lead_time: &'a Table,
}

/// Resolve the six-field summary for one selection. The six resolutions
/// are independent; none reads another's output. Data-quality issues in
/// any source degrade to that field's default instead of failing the view.
pub fn resolve_summary(tables: &SourceTables<'_>, key: &SelectionKey) -> ResolvedSummary {
    let sales = select(
        tables.sales,
        &[
            Predicate::date(columns::SALES_DATE, key.date),
            Predicate::text(columns::SKU, &key.sku),
        ],
    );
    let description = match sales.value(0, columns::SALES_DESCRIPTION) {
        Some(value) => value.to_string(),
        None => NOT_AVAILABLE.to_string(),
    };
    let production = select(
        tables.production,
        &[
            Predicate::date(columns::PRODUCTION_DATE, key.date),
            Predicate::text(columns::PRODUCTION_SKU, &key.sku),
        ],
    );
    let stock = select(
        tables.stock,
        &[
            Predicate::date(columns::STOCK_DATE, key.date),
            Predicate::text(columns::SKU, &key.sku),
        ],
    );
    let target = pivot_column_key(key.date);
    let summary = ResolvedSummary {
        sales_qty: sum_column(&sales, columns::SALES_VOLUME),
        production_qty: sum_column(&production, columns::PRODUCTION_QTY),
        stock_qty: sum_column(&stock, columns::STOCK_QTY),
        demand_qty: resolve_cell(tables.demand, columns::SKU, &key.sku, &target),
        norms_qty: resolve_cell(tables.norms, columns::SKU, &key.sku, &target),
        lead_time: resolve_lead_time(tables.lead_time, columns::SKU, &key.sku),
        description,
    };
    debug!(
        date = %key.date,
        sku = %key.sku,
        sales = summary.sales_qty,
        production = summary.production_qty,
        stock = summary.stock_qty,
        demand = summary.demand_qty,
        norms = summary.norms_qty,
        lead_time = %summary.lead_time,
        "summary resolved"
    );
    summary
}

/// Distinct parsable invoice dates from the sales table, sorted ascending.
/// Selectors are populated from the sales table only.
pub fn date_domain(sales: &Table) -> Vec<NaiveDate> {
    let Some(idx) = sales.column_index(columns::SALES_DATE) else {
        return Vec::new();
    };
    let dates: BTreeSet<NaiveDate> = sales
        .rows
        .iter()
        .filter_map(|row| row.get(idx))
        .filter_map(|cell| parse_date(cell))
        .collect();
    dates.into_iter().collect()
}

/// Distinct non-empty SKU codes from the sales table, sorted ascending.
pub fn sku_domain(sales: &Table) -> Vec<String> {
    let Some(idx) = sales.column_index(columns::SKU) else {
        return Vec::new();
    };
    let skus: BTreeSet<String> = sales
        .rows
        .iter()
        .filter_map(|row| row.get(idx))
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect();
    skus.into_iter().collect()
}
