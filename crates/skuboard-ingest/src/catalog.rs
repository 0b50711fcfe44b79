use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use skuboard_model::{Result, SourceKind, Table};

use crate::csv_table::read_table;

/// Data-access interface for the six sources. Tables are parsed once per
/// kind and served from an in-memory cache for the rest of the session;
/// resolution behaves identically on fresh or cached tables.
#[derive(Debug)]
pub struct Catalog {
    root: PathBuf,
    overrides: HashMap<SourceKind, PathBuf>,
    cache: HashMap<SourceKind, Arc<Table>>,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overrides: HashMap::new(),
            cache: HashMap::new(),
        }
    }

    /// Read this source from an explicit path instead of the default file
    /// name under the root directory.
    #[must_use]
    pub fn with_source_path(mut self, kind: SourceKind, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(kind, path.into());
        self
    }

    pub fn path_for(&self, kind: SourceKind) -> PathBuf {
        self.overrides
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| self.root.join(kind.default_file_name()))
    }

    pub fn load(&mut self, kind: SourceKind) -> Result<Arc<Table>> {
        if let Some(table) = self.cache.get(&kind) {
            debug!(source = %kind, "table served from cache");
            return Ok(Arc::clone(table));
        }
        let path = self.path_for(kind);
        let table = read_table(&path)?;
        check_required_columns(kind, &table);
        info!(
            source = %kind,
            path = %path.display(),
            rows = table.len(),
            columns = table.columns.len(),
            "table loaded"
        );
        let table = Arc::new(table);
        self.cache.insert(kind, Arc::clone(&table));
        Ok(table)
    }
}

/// A missing required column is a data-quality signal, not a load failure:
/// lookups against it resolve to defaults.
fn check_required_columns(kind: SourceKind, table: &Table) {
    for column in kind.required_columns() {
        if table.column_index(column).is_none() {
            warn!(source = %kind, column, "required column missing; lookups resolve to defaults");
        }
    }
    if kind == SourceKind::LeadTime && table.column_containing("lead").is_none() {
        warn!(source = %kind, "no lead time column found; lead time resolves to NA");
    }
}
