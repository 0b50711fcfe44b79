use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use skuboard_model::{LeadTime, NOT_AVAILABLE};

use crate::types::ReportResult;

pub fn print_report(result: &ReportResult) {
    println!("Date: {}", result.date);
    println!("Material code: {}", result.sku);
    println!("Description: {}", result.summary.description);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sales"),
        header_cell("Production"),
        header_cell("Stock"),
        header_cell("Demand"),
        header_cell("Norms"),
        header_cell("Lead Time"),
    ]);
    apply_report_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.summary.sales_qty),
        Cell::new(result.summary.production_qty),
        Cell::new(result.summary.stock_qty),
        Cell::new(result.summary.demand_qty),
        Cell::new(result.summary.norms_qty),
        lead_time_cell(result.summary.lead_time),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn lead_time_cell(lead_time: LeadTime) -> Cell {
    match lead_time {
        LeadTime::Days(days) => Cell::new(days),
        LeadTime::Unavailable => Cell::new(NOT_AVAILABLE).fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
