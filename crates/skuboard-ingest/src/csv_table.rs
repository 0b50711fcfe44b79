use std::path::Path;

use csv::ReaderBuilder;

use skuboard_model::{BoardError, Result, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn csv_error(path: &Path, error: csv::Error) -> BoardError {
    let path = path.to_path_buf();
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => BoardError::Io { path, source },
        _ => BoardError::Decode { path, message },
    }
}

/// Read one CSV source into a [`Table`]. The first non-empty row is the
/// header; rows shorter than the header are padded with empty cells, longer
/// rows truncated, and fully-empty rows dropped.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, error))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(path, error))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }
    let mut raw = raw_rows.into_iter();
    let Some(header_row) = raw.next() else {
        return Ok(Table::default());
    };
    let columns: Vec<String> = header_row
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::new();
    for record in raw {
        let mut row = Vec::with_capacity(columns.len());
        for idx in 0..columns.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(Table { columns, rows })
}
