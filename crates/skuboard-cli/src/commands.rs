use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info;

use skuboard_ingest::Catalog;
use skuboard_model::{BoardError, SelectionKey, SourceKind};
use skuboard_resolve::{SourceTables, date_domain, resolve_summary, sku_domain};

use crate::cli::{DomainArgs, ReportArgs};
use crate::summary::apply_table_style;
use crate::types::ReportResult;

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let mut catalog = report_catalog(args);
    let sales = catalog.load(SourceKind::Sales).context("load sales")?;

    let dates = date_domain(&sales);
    let date = match args.date {
        Some(date) => {
            if !dates.contains(&date) {
                bail!(
                    "date {date} is not in the sales table; \
                     run `skuboard dates <DATA_DIR>` to list selectable dates"
                );
            }
            date
        }
        None => dates
            .first()
            .copied()
            .ok_or(BoardError::EmptyDomain { what: "dates" })?,
    };

    let skus = sku_domain(&sales);
    let sku = match &args.sku {
        Some(sku) => {
            if !skus.contains(sku) {
                bail!(
                    "SKU {sku} is not in the sales table; \
                     run `skuboard skus <DATA_DIR>` to list selectable codes"
                );
            }
            sku.clone()
        }
        None => skus
            .first()
            .cloned()
            .ok_or(BoardError::EmptyDomain { what: "SKU codes" })?,
    };

    let production = catalog
        .load(SourceKind::Production)
        .context("load production")?;
    let stock = catalog.load(SourceKind::Stock).context("load stock")?;
    let demand = catalog.load(SourceKind::Demand).context("load demand")?;
    let norms = catalog.load(SourceKind::Norms).context("load norms")?;
    let lead_time = catalog
        .load(SourceKind::LeadTime)
        .context("load lead time")?;

    let key = SelectionKey::new(date, sku);
    info!(date = %key.date, sku = %key.sku, "resolving summary");
    let tables = SourceTables {
        sales: &sales,
        production: &production,
        stock: &stock,
        demand: &demand,
        norms: &norms,
        lead_time: &lead_time,
    };
    let summary = resolve_summary(&tables, &key);
    Ok(ReportResult {
        date: key.date,
        sku: key.sku,
        summary,
    })
}

pub fn run_dates(args: &DomainArgs) -> Result<()> {
    let sales = domain_catalog(args)
        .load(SourceKind::Sales)
        .context("load sales")?;
    for date in date_domain(&sales) {
        println!("{date}");
    }
    Ok(())
}

pub fn run_skus(args: &DomainArgs) -> Result<()> {
    let sales = domain_catalog(args)
        .load(SourceKind::Sales)
        .context("load sales")?;
    for sku in sku_domain(&sales) {
        println!("{sku}");
    }
    Ok(())
}

pub fn run_sources() {
    let mut table = Table::new();
    table.set_header(vec!["Source", "Default file", "Required columns"]);
    apply_table_style(&mut table);
    for kind in SourceKind::ALL {
        let mut columns = kind.required_columns().join(", ");
        match kind {
            SourceKind::Demand | SourceKind::Norms => {
                columns.push_str(", one DDMMYYYY column per date");
            }
            SourceKind::LeadTime => {
                columns.push_str(", a column whose name contains \"lead\"");
            }
            _ => {}
        }
        table.add_row(vec![
            kind.label().to_string(),
            kind.default_file_name().to_string(),
            columns,
        ]);
    }
    println!("{table}");
}

fn report_catalog(args: &ReportArgs) -> Catalog {
    let mut catalog = Catalog::new(&args.data_dir);
    let overrides = [
        (SourceKind::Sales, &args.sales),
        (SourceKind::Production, &args.production),
        (SourceKind::Stock, &args.stock),
        (SourceKind::Demand, &args.demand),
        (SourceKind::Norms, &args.norms),
        (SourceKind::LeadTime, &args.lead_time),
    ];
    for (kind, path) in overrides {
        if let Some(path) = path {
            catalog = catalog.with_source_path(kind, path);
        }
    }
    catalog
}

fn domain_catalog(args: &DomainArgs) -> Catalog {
    let mut catalog = Catalog::new(&args.data_dir);
    if let Some(path) = &args.sales {
        catalog = catalog.with_source_path(SourceKind::Sales, path);
    }
    catalog
}
