//! FILENAME: app/src/config.rs
// PURPOSE: Application configuration, read from an optional JSON file.
// CONTEXT: Every field has a default, so an empty object `{}` is a valid file.

use std::path::{Path, PathBuf};

use engine::{ItemCatalog, DEFAULT_TICKET_PREFIX};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Database file used when neither config nor CLI names one.
pub const DEFAULT_DATABASE_PATH: &str = "chamados.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// SQLite file holding the ticket table.
    pub database_path: PathBuf,
    /// Log file; logging goes nowhere but stderr (with --verbose) when unset.
    pub log_path: Option<PathBuf>,
    /// Prefix put in front of ticket numbers typed as bare digits.
    pub ticket_prefix: String,
    /// Item types the form accepts.
    pub item_types: ItemCatalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            log_path: None,
            ticket_prefix: DEFAULT_TICKET_PREFIX.to_string(),
            item_types: ItemCatalog::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
