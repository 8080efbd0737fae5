//! TOML configuration: game rules, storage, logging and UI settings.

mod loader;
mod types;

pub use loader::{ConfigError, LOG_LEVELS};
pub use types::{Config, GameConfig, LoggingConfig, StorageConfig, UiConfig};

use std::path::PathBuf;

impl Config {
    /// Score file to use, honouring the configured override.
    pub fn high_score_path(&self) -> PathBuf {
        self.storage
            .high_score_file
            .clone()
            .unwrap_or_else(crate::store::FileStore::default_path)
    }

    /// Log file to use, honouring the configured override.
    pub fn log_path(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("twenty48").join("twenty48.log")
        })
    }
}
