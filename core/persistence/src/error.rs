//! FILENAME: core/persistence/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the ticket store.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },
}

/// Failures while writing or reading an exported table. Kept apart from
/// `PersistenceError` so callers can tell a failed export from a failed save.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Row {row} has {found} cells, header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Table has {rows} rows but no columns")]
    EmptyHeader { rows: usize },
}

impl ExportError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        ExportError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}
