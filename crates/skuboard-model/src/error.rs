use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
    #[error("sales table has no selectable {what}")]
    EmptyDomain { what: &'static str },
}

pub type Result<T> = std::result::Result<T, BoardError>;
