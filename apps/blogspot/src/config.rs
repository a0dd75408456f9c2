//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blogspot_core::pagination::DEFAULT_PAGE_SIZE;

/// Data file value that selects the in-memory store.
pub const MEMORY_STORE: &str = ":memory:";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where posts are persisted; `:memory:` keeps them for this run only.
    pub data_file: PathBuf,
    pub page_size: usize,
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("blogspot-data.json"),
            page_size: DEFAULT_PAGE_SIZE,
            json_logs: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_file: env::var("BLOGSPOT_DATA_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            page_size: env::var("BLOGSPOT_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.page_size),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }

    pub fn uses_memory_store(&self) -> bool {
        self.data_file.as_os_str() == MEMORY_STORE
    }
}
