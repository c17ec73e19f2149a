//! Library configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! The corpus dataset and the sacred-names table are configuration data:
//! both can be swapped by pointing an environment variable at a different
//! file, with no code changes.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::warn;

use crate::constants::search::DEFAULT_LIMIT;
use crate::corpus::{self, RawBook};
use crate::error::{Error, Result};
use crate::names::SubstitutionTable;
use crate::search::SearchOptions;

/// Configuration for corpus and table loading.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON corpus dataset file.
    pub data_path: Option<PathBuf>,
    /// Path to a custom sacred-names table (JSON object of phrase→replacement).
    pub names_table_path: Option<PathBuf>,
    /// Default page size for searches.
    pub search_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            names_table_path: None,
            search_limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Dataset path: env var override, or default platform data directory.
        // An explicitly set path is kept even when the file does not exist,
        // so a typo surfaces as an IO error naming that path instead of a
        // misleading "variable not set" hint.
        config.data_path = match env::var("CORPUS_DATA_PATH") {
            Ok(path) => {
                let p = PathBuf::from(shellexpand::tilde(&path).to_string());
                if !p.is_file() {
                    warn!(path = %p.display(), "CORPUS_DATA_PATH does not point at an existing file");
                }
                Some(p)
            }
            Err(_) => default_data_path(),
        };

        if let Ok(path) = env::var("NAMES_TABLE_PATH") {
            let p = PathBuf::from(shellexpand::tilde(&path).to_string());
            if p.is_file() {
                config.names_table_path = Some(p);
            }
        }

        if let Ok(limit) = env::var("SEARCH_LIMIT") {
            if let Ok(limit) = limit.parse::<usize>() {
                if limit > 0 {
                    config.search_limit = limit;
                }
            }
        }

        Ok(config)
    }

    /// Check if a corpus dataset file was found.
    pub const fn has_data_path(&self) -> bool {
        self.data_path.is_some()
    }

    /// Read and parse the configured dataset file.
    pub fn load_records(&self) -> Result<Vec<RawBook>> {
        let path = self.data_path.as_ref().ok_or_else(|| {
            Error::config(
                "no corpus dataset file configured",
                "Set CORPUS_DATA_PATH to a JSON dataset file",
            )
        })?;
        corpus::load_dataset_file(path)
    }

    /// Build the substitution table: the configured custom table, or the
    /// built-in default when none is configured.
    pub fn substitution_table(&self) -> Result<SubstitutionTable> {
        match &self.names_table_path {
            Some(path) => SubstitutionTable::from_json_file(path),
            None => Ok(SubstitutionTable::default()),
        }
    }

    /// Search options seeded with the configured page size.
    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            limit: Some(self.search_limit),
            ..SearchOptions::default()
        }
    }
}

/// Default dataset location in the platform data directory.
fn default_data_path() -> Option<PathBuf> {
    let path = dirs::data_dir()?.join("concordance").join("corpus.json");
    path.is_file().then_some(path)
}
