use std::fs;
use std::sync::Arc;

use skuboard_ingest::Catalog;
use skuboard_model::{BoardError, SourceKind};

#[test]
fn load_memoizes_per_source() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join(SourceKind::Sales.default_file_name()),
        "invoice_date,SKUCode,volume,Description\n2024-03-07,X1,10,Widget\n",
    )
    .expect("write sales");
    let mut catalog = Catalog::new(dir.path());
    let first = catalog.load(SourceKind::Sales).expect("first load");
    let second = catalog.load(SourceKind::Sales).expect("second load");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 1);
}

#[test]
fn source_path_override_wins_over_root() {
    let dir = tempfile::tempdir().expect("temp dir");
    let elsewhere = dir.path().join("elsewhere.csv");
    fs::write(&elsewhere, "SKUCode,Design Lead\nX1,4\n").expect("write override");
    let mut catalog =
        Catalog::new(dir.path()).with_source_path(SourceKind::LeadTime, &elsewhere);
    assert_eq!(catalog.path_for(SourceKind::LeadTime), elsewhere);
    let table = catalog.load(SourceKind::LeadTime).expect("load override");
    assert_eq!(table.columns, vec!["SKUCode", "Design Lead"]);
}

#[test]
fn missing_file_is_a_loader_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut catalog = Catalog::new(dir.path());
    let error = catalog.load(SourceKind::Stock).expect_err("missing file");
    assert!(matches!(error, BoardError::Io { .. }));
}

#[test]
fn missing_required_column_still_loads() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join(SourceKind::Stock.default_file_name()),
        "date,SKUCode\n20240307,X1\n",
    )
    .expect("write stock");
    let mut catalog = Catalog::new(dir.path());
    let table = catalog.load(SourceKind::Stock).expect("load degrades");
    assert_eq!(table.len(), 1);
}
