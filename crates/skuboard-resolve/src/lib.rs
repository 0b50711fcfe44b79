//! Resolution core for the SKU board: pure lookups over in-memory tables.
//!
//! Two components reconcile the six independently-shaped sources into one
//! per-(date, SKU) summary. The table accessor filters row-per-event tables
//! by equality predicates; the pivot resolver reads one cell from wide
//! tables keyed by date-as-column-name. Missing keys, missing columns, and
//! malformed cells degrade to per-field defaults rather than surfacing as
//! errors.

pub mod accessor;
pub mod coerce;
pub mod dates;
pub mod lead_time;
pub mod pivot;
pub mod summary;

pub use accessor::{Predicate, select, sum_column};
pub use coerce::coerce_qty;
pub use dates::{parse_date, pivot_column_key};
pub use lead_time::resolve_lead_time;
pub use pivot::resolve_cell;
pub use summary::{SourceTables, date_domain, resolve_summary, sku_domain};
