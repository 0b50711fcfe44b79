pub mod error;
pub mod source;
pub mod summary;
pub mod table;

pub use error::{BoardError, Result};
pub use source::SourceKind;
pub use summary::{LeadTime, NOT_AVAILABLE, ResolvedSummary, SelectionKey};
pub use table::Table;
