//! Key-value persistence for the high score.
//!
//! The session only ever touches one key, [`HIGH_SCORE_KEY`], whose value is a
//! decimal integer string. Store failures never reach gameplay: callers log
//! and keep the in-memory value.

mod file;

pub use file::FileStore;

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Key under which the high score is persisted.
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to encode store contents: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// String key-value store, the shape of a browser `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-process store. Used by tests and when persistence is disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a high score.
    pub fn with_high_score(score: u64) -> Self {
        let mut store = Self::new();
        store.values.insert(HIGH_SCORE_KEY.to_string(), score.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted high score.
///
/// Missing, unreadable or malformed values all yield 0; the last two are logged.
pub fn load_high_score<S: KeyValueStore + ?Sized>(store: &S) -> u64 {
    match store.get(HIGH_SCORE_KEY) {
        Ok(Some(raw)) => match raw.trim().parse::<u64>() {
            Ok(score) => score,
            Err(err) => {
                tracing::warn!(value = %raw, error = %err, "Ignoring malformed stored high score");
                0
            }
        },
        Ok(None) => 0,
        Err(err) => {
            tracing::warn!(error = %err, "High score store unavailable, starting from 0");
            0
        }
    }
}

/// Persist the high score, logging instead of failing.
///
/// Returns whether the write succeeded.
pub fn save_high_score<S: KeyValueStore + ?Sized>(store: &mut S, score: u64) -> bool {
    match store.set(HIGH_SCORE_KEY, &score.to_string()) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(score, error = %err, "Failed to persist high score");
            false
        }
    }
}
