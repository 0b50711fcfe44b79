use chrono::NaiveDate;

use skuboard_model::{LeadTime, SelectionKey, Table};
use skuboard_resolve::{
    Predicate, SourceTables, date_domain, resolve_cell, resolve_lead_time, resolve_summary,
    select, sku_domain, sum_column,
};

fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    Table {
        columns: columns.iter().map(|c| (*c).to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn sales_table() -> Table {
    table(
        &["invoice_date", "SKUCode", "volume", "Description"],
        &[
            &["2024-03-07", "X1", "10", "Widget A"],
            &["2024-03-07", "X2", "5", "Widget B"],
            &["2024-03-07", "X1", "15", "Widget A"],
            &["2024-03-08", "X1", "99", "Widget A"],
            &["not-a-date", "X1", "1", "Widget A"],
        ],
    )
}

#[test]
fn select_returns_exactly_the_matching_rows() {
    let sales = sales_table();
    let filtered = select(
        &sales,
        &[
            Predicate::date("invoice_date", date(2024, 3, 7)),
            Predicate::text("SKUCode", "X1"),
        ],
    );
    assert_eq!(filtered.columns, sales.columns);
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered.rows[0][2], "10");
    assert_eq!(filtered.rows[1][2], "15");
}

#[test]
fn select_is_idempotent() {
    let sales = sales_table();
    let predicates = [
        Predicate::date("invoice_date", date(2024, 3, 7)),
        Predicate::text("SKUCode", "X1"),
    ];
    let once = select(&sales, &predicates);
    let twice = select(&once, &predicates);
    assert_eq!(once, twice);
}

#[test]
fn select_on_absent_column_matches_no_rows() {
    let sales = sales_table();
    let filtered = select(&sales, &[Predicate::text("Warehouse", "W1")]);
    assert_eq!(filtered.columns, sales.columns);
    assert!(filtered.is_empty());
}

#[test]
fn select_unparsable_date_cell_never_matches() {
    let sales = sales_table();
    // Any valid selected date must not match the "not-a-date" row.
    for day in 1..=28 {
        let filtered = select(&sales, &[Predicate::date("invoice_date", date(2024, 3, day))]);
        assert!(filtered.rows.iter().all(|row| row[0] != "not-a-date"));
    }
}

#[test]
fn sum_column_sums_every_matching_row() {
    let sales = sales_table();
    let filtered = select(
        &sales,
        &[
            Predicate::date("invoice_date", date(2024, 3, 7)),
            Predicate::text("SKUCode", "X1"),
        ],
    );
    assert_eq!(sum_column(&filtered, "volume"), 25);
}

#[test]
fn sum_column_tolerates_empty_and_malformed_input() {
    let empty = select(&sales_table(), &[Predicate::text("SKUCode", "missing")]);
    assert_eq!(sum_column(&empty, "volume"), 0);
    assert_eq!(sum_column(&sales_table(), "no_such_column"), 0);

    let stock = table(
        &["date", "SKUCode", "total_qty"],
        &[
            &["20240307", "X1", "N/A"],
            &["20240307", "X1", "12.7"],
        ],
    );
    let filtered = select(
        &stock,
        &[
            Predicate::date("date", date(2024, 3, 7)),
            Predicate::text("SKUCode", "X1"),
        ],
    );
    assert_eq!(sum_column(&filtered, "total_qty"), 12);
}

#[test]
fn resolve_cell_reads_the_pivoted_date_column() {
    let demand = table(
        &["SKUCode", "07032024", "08032024"],
        &[&["X1", "40", "41"], &["X2", "50", "51"]],
    );
    assert_eq!(resolve_cell(&demand, "SKUCode", "X1", "07032024"), 40);
    assert_eq!(resolve_cell(&demand, "SKUCode", "X2", "08032024"), 51);
}

#[test]
fn resolve_cell_defaults_on_missing_target_column() {
    let demand = table(&["SKUCode", "08032024"], &[&["X1", "40"]]);
    // SKU presence is irrelevant once the column is absent.
    assert_eq!(resolve_cell(&demand, "SKUCode", "X1", "07032024"), 0);
    assert_eq!(resolve_cell(&demand, "SKUCode", "X9", "07032024"), 0);
}

#[test]
fn resolve_cell_defaults_on_missing_identifier() {
    let demand = table(&["SKUCode", "07032024"], &[&["X1", "40"]]);
    assert_eq!(resolve_cell(&demand, "SKUCode", "X9", "07032024"), 0);
    assert_eq!(resolve_cell(&demand, "Matl.Code", "X1", "07032024"), 0);
}

#[test]
fn resolve_cell_first_matching_row_wins() {
    let demand = table(
        &["SKUCode", "07032024"],
        &[&["X1", "40"], &["X1", "99"]],
    );
    assert_eq!(resolve_cell(&demand, "SKUCode", "X1", "07032024"), 40);
}

#[test]
fn resolve_cell_defaults_on_malformed_cell() {
    let demand = table(&["SKUCode", "07032024"], &[&["X1", "n/a"]]);
    assert_eq!(resolve_cell(&demand, "SKUCode", "X1", "07032024"), 0);
}

#[test]
fn lead_time_picks_first_lead_column_in_declared_order() {
    let lead = table(
        &["SKUCode", "Backup Lead", "Lead Time in days"],
        &[&["X1", "4", "9"]],
    );
    assert_eq!(
        resolve_lead_time(&lead, "SKUCode", "X1"),
        LeadTime::Days(4)
    );
}

#[test]
fn lead_time_matches_column_name_case_insensitively() {
    let lead = table(&["SKUCode", "DESIGN LEADTIME"], &[&["X1", "6.5"]]);
    assert_eq!(
        resolve_lead_time(&lead, "SKUCode", "X1"),
        LeadTime::Days(6)
    );
}

#[test]
fn lead_time_without_matching_row_is_unavailable() {
    let lead = table(&["SKUCode", "Lead Time in days"], &[&["X2", "9"]]);
    assert_eq!(
        resolve_lead_time(&lead, "SKUCode", "X1"),
        LeadTime::Unavailable
    );
}

#[test]
fn lead_time_without_lead_column_is_unavailable() {
    let lead = table(&["SKUCode", "Days"], &[&["X1", "9"]]);
    assert_eq!(
        resolve_lead_time(&lead, "SKUCode", "X1"),
        LeadTime::Unavailable
    );
}

#[test]
fn lead_time_malformed_cell_is_unavailable() {
    let lead = table(&["SKUCode", "Lead Time in days"], &[&["X1", "tbd"]]);
    assert_eq!(
        resolve_lead_time(&lead, "SKUCode", "X1"),
        LeadTime::Unavailable
    );
}

#[test]
fn summary_resolves_all_six_fields_independently() {
    let sales = sales_table();
    let production = table(
        &["Prod.Date", "Matl.Code", "Prod.Qty."],
        &[
            &["2024-03-07", "X1", "30"],
            &["2024-03-07", "X1", "2"],
            &["2024-03-07", "X2", "8"],
        ],
    );
    let stock = table(
        &["date", "SKUCode", "total_qty"],
        &[&["20240307", "X1", "N/A"], &["20240307", "X1", "12"]],
    );
    let demand = table(&["SKUCode", "07032024"], &[&["X1", "40"]]);
    let norms = table(&["SKUCode", "07032024"], &[&["X1", "45.9"]]);
    let lead = table(&["SKUCode", "Lead Time in days"], &[&["X2", "9"]]);
    let tables = SourceTables {
        sales: &sales,
        production: &production,
        stock: &stock,
        demand: &demand,
        norms: &norms,
        lead_time: &lead,
    };
    let key = SelectionKey::new(date(2024, 3, 7), "X1");
    let summary = resolve_summary(&tables, &key);
    assert_eq!(summary.sales_qty, 25);
    assert_eq!(summary.production_qty, 32);
    assert_eq!(summary.stock_qty, 12);
    assert_eq!(summary.demand_qty, 40);
    assert_eq!(summary.norms_qty, 45);
    assert_eq!(summary.lead_time, LeadTime::Unavailable);
    assert_eq!(summary.description, "Widget A");
}

#[test]
fn summary_degrades_to_defaults_when_nothing_matches() {
    let empty_sales = table(&["invoice_date", "SKUCode", "volume", "Description"], &[]);
    let tables = SourceTables {
        sales: &empty_sales,
        production: &table(&["Prod.Date", "Matl.Code", "Prod.Qty."], &[]),
        stock: &table(&["date", "SKUCode", "total_qty"], &[]),
        demand: &table(&["SKUCode"], &[]),
        norms: &table(&["SKUCode"], &[]),
        lead_time: &table(&["SKUCode"], &[]),
    };
    let key = SelectionKey::new(date(2024, 3, 7), "X1");
    let summary = resolve_summary(&tables, &key);
    assert_eq!(summary.sales_qty, 0);
    assert_eq!(summary.production_qty, 0);
    assert_eq!(summary.stock_qty, 0);
    assert_eq!(summary.demand_qty, 0);
    assert_eq!(summary.norms_qty, 0);
    assert_eq!(summary.lead_time, LeadTime::Unavailable);
    assert_eq!(summary.description, "NA");
}

#[test]
fn domains_are_deduplicated_sorted_and_sales_derived() {
    let sales = sales_table();
    assert_eq!(
        date_domain(&sales),
        vec![date(2024, 3, 7), date(2024, 3, 8)]
    );
    assert_eq!(sku_domain(&sales), vec!["X1", "X2"]);

    let no_columns = table(&["other"], &[&["x"]]);
    assert!(date_domain(&no_columns).is_empty());
    assert!(sku_domain(&no_columns).is_empty());
}
