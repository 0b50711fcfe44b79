use tracing::debug;

use skuboard_model::Table;

use crate::coerce::coerce_qty;

/// Resolve one numeric cell from a wide pivot table: the first row whose
/// `id_column` equals `id_value`, at `target_column`. A missing identifier
/// column, missing target column, unmatched identifier, or malformed cell
/// all resolve to 0. First match in load order wins when several rows share
/// an identifier; well-formed input carries one row per identifier, but
/// uniqueness is not enforced here.
pub fn resolve_cell(table: &Table, id_column: &str, id_value: &str, target_column: &str) -> i64 {
    let Some(id_idx) = table.column_index(id_column) else {
        debug!(id_column, "identifier column missing; resolving to default");
        return 0;
    };
    let Some(target_idx) = table.column_index(target_column) else {
        debug!(target_column, "target column missing; resolving to default");
        return 0;
    };
    let matched = table
        .rows
        .iter()
        .find(|row| row.get(id_idx).map(String::as_str) == Some(id_value));
    let Some(row) = matched else {
        return 0;
    };
    row.get(target_idx)
        .and_then(|cell| coerce_qty(cell))
        .unwrap_or(0)
}
