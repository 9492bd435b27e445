//! FILENAME: app/src/error.rs
// PURPOSE: Errors surfaced by command handlers and configuration loading.
// CONTEXT: Every variant carries the name of the operation that failed.

use std::path::PathBuf;

use engine::ValidationError;
use persistence::{ExportError, PersistenceError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{operation}: invalid input: {source}")]
    Validation {
        operation: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("{operation}: storage failed: {source}")]
    Persistence {
        operation: &'static str,
        #[source]
        source: PersistenceError,
    },

    #[error("{operation}: export failed: {source}")]
    Export {
        operation: &'static str,
        #[source]
        source: ExportError,
    },

    #[error("{operation}: application state is unavailable (lock poisoned)")]
    StatePoisoned { operation: &'static str },
}

impl CommandError {
    /// Name of the command that produced this error.
    pub fn operation(&self) -> &'static str {
        match self {
            CommandError::Validation { operation, .. }
            | CommandError::Persistence { operation, .. }
            | CommandError::Export { operation, .. }
            | CommandError::StatePoisoned { operation } => *operation,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
