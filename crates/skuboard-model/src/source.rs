use std::fmt;

/// Column names the six source files are expected to carry.
pub mod columns {
    /// Join key shared by the sales, stock, demand, norms, and lead time tables.
    pub const SKU: &str = "SKUCode";
    pub const SALES_DATE: &str = "invoice_date";
    pub const SALES_VOLUME: &str = "volume";
    pub const SALES_DESCRIPTION: &str = "Description";
    pub const PRODUCTION_DATE: &str = "Prod.Date";
    pub const PRODUCTION_SKU: &str = "Matl.Code";
    pub const PRODUCTION_QTY: &str = "Prod.Qty.";
    pub const STOCK_DATE: &str = "date";
    pub const STOCK_QTY: &str = "total_qty";
}

/// The six tabular sources the board reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Sales,
    Production,
    Stock,
    Demand,
    Norms,
    LeadTime,
}

impl SourceKind {
    pub const ALL: [SourceKind; 6] = [
        SourceKind::Sales,
        SourceKind::Production,
        SourceKind::Stock,
        SourceKind::Demand,
        SourceKind::Norms,
        SourceKind::LeadTime,
    ];

    /// Stable lowercase identifier used in logs and flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Sales => "sales",
            SourceKind::Production => "production",
            SourceKind::Stock => "stock",
            SourceKind::Demand => "demand",
            SourceKind::Norms => "norms",
            SourceKind::LeadTime => "lead-time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Sales => "Sales",
            SourceKind::Production => "Production",
            SourceKind::Stock => "Stock",
            SourceKind::Demand => "Demand",
            SourceKind::Norms => "Norms",
            SourceKind::LeadTime => "Lead time",
        }
    }

    /// File name expected under the data directory unless overridden.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            SourceKind::Sales => "daily_sales.csv",
            SourceKind::Production => "daily_production.csv",
            SourceKind::Stock => "daily_stock.csv",
            SourceKind::Demand => "demand.csv",
            SourceKind::Norms => "norms.csv",
            SourceKind::LeadTime => "lead_time.csv",
        }
    }

    /// Columns the source must carry by name. Pivot date columns and the
    /// lead time column are discovered at resolution time, not listed here.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            SourceKind::Sales => &[
                columns::SALES_DATE,
                columns::SKU,
                columns::SALES_VOLUME,
                columns::SALES_DESCRIPTION,
            ],
            SourceKind::Production => &[
                columns::PRODUCTION_DATE,
                columns::PRODUCTION_SKU,
                columns::PRODUCTION_QTY,
            ],
            SourceKind::Stock => &[columns::STOCK_DATE, columns::SKU, columns::STOCK_QTY],
            SourceKind::Demand | SourceKind::Norms | SourceKind::LeadTime => &[columns::SKU],
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
