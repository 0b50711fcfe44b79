use chrono::NaiveDate;

use skuboard_model::Table;

use crate::coerce::coerce_qty;
use crate::dates::parse_date;

/// Equality constraint on one column. Constraints compose with logical AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    TextEq { column: String, value: String },
    DateEq { column: String, date: NaiveDate },
}

impl Predicate {
    pub fn text(column: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::TextEq {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn date(column: impl Into<String>, date: NaiveDate) -> Self {
        Predicate::DateEq {
            column: column.into(),
            date,
        }
    }

    fn column(&self) -> &str {
        match self {
            Predicate::TextEq { column, .. } | Predicate::DateEq { column, .. } => column,
        }
    }

    fn matches(&self, cell: &str) -> bool {
        match self {
            Predicate::TextEq { value, .. } => cell.trim() == value,
            Predicate::DateEq { date, .. } => parse_date(cell) == Some(*date),
        }
    }
}

/// Rows satisfying every predicate, with the input's column set and row
/// order preserved. A predicate naming an absent column matches no rows;
/// an empty result is a valid outcome, never a failure.
pub fn select(table: &Table, predicates: &[Predicate]) -> Table {
    let mut result = Table::new(table.columns.clone());
    let mut indexed = Vec::with_capacity(predicates.len());
    for predicate in predicates {
        let Some(idx) = table.column_index(predicate.column()) else {
            return result;
        };
        indexed.push((idx, predicate));
    }
    for row in &table.rows {
        let keep = indexed
            .iter()
            .all(|(idx, predicate)| row.get(*idx).is_some_and(|cell| predicate.matches(cell)));
        if keep {
            result.rows.push(row.clone());
        }
    }
    result
}

/// Sum a numeric column across all rows, coercing each cell through the
/// one quantity rule. Zero rows or a missing column sum to 0.
pub fn sum_column(table: &Table, column: &str) -> i64 {
    let Some(idx) = table.column_index(column) else {
        return 0;
    };
    table
        .rows
        .iter()
        .filter_map(|row| row.get(idx))
        .map(|cell| coerce_qty(cell).unwrap_or(0))
        .sum()
}
