use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Gameplay rules that are not fixed by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed RNG seed; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Spawn a tile even when a move changes nothing (default: false).
    #[serde(default)]
    pub spawn_on_null_move: bool,
}

/// Where the high score lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Persist the high score to disk (default: true).
    #[serde(default = "default_persist")]
    pub persist: bool,
    /// Score file; defaults to `<data_dir>/twenty48/scores.toml`.
    #[serde(default)]
    pub high_score_file: Option<PathBuf>,
}

/// Tracing output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter level: trace, debug, info, warn, error or off (default: info).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal front-end; defaults to `<data_dir>/twenty48/twenty48.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll / redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_persist() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            high_score_file: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
