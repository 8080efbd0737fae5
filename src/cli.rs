use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::session::{GameSession, SpawnPolicy};
use crate::store::{FileStore, KeyValueStore, MemoryStore};

#[derive(Debug, Parser)]
#[command(name = "twenty48", version, about = "Sliding-tile merge puzzle on a 4x4 grid")]
pub struct Cli {
    /// Config file (default: ~/.config/twenty48/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fixed seed for tile spawns
    #[arg(long)]
    pub seed: Option<u64>,

    /// High score file (default: <data dir>/twenty48/scores.toml)
    #[arg(long, value_name = "PATH")]
    pub high_score_file: Option<PathBuf>,

    /// Keep the high score in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Spawn a tile even when a move changes nothing
    #[arg(long)]
    pub spawn_on_null_move: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Play in the terminal (default)
    Play,
    /// Apply remote-command JSON lines and print one snapshot per line
    Replay {
        /// Read commands from a file instead of stdin
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
    },
    /// Print the stored high score
    HighScore {
        /// Reset the stored high score to 0
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Load the config named on the command line (or the default one) and
    /// apply flag overrides on top.
    pub fn resolve_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(path) = &self.high_score_file {
            config.storage.high_score_file = Some(path.clone());
        }
        if self.no_persist {
            config.storage.persist = false;
        }
        if self.spawn_on_null_move {
            config.game.spawn_on_null_move = true;
        }
    }
}

/// High-score store selected by the config.
pub fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    if config.storage.persist {
        Box::new(FileStore::new(config.high_score_path()))
    } else {
        Box::new(MemoryStore::new())
    }
}

/// Session wired from config: seeded or entropy RNG, store, spawn policy.
pub fn session_from_config(config: &Config) -> GameSession<StdRng, Box<dyn KeyValueStore>> {
    let rng = match config.game.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    GameSession::new(rng, open_store(config)).spawn_policy(SpawnPolicy::from_spawn_on_null_move(
        config.game.spawn_on_null_move,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "twenty48",
            "--seed",
            "9",
            "--no-persist",
            "--spawn-on-null-move",
            "replay",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.game.seed, Some(9));
        assert!(!config.storage.persist);
        assert!(config.game.spawn_on_null_move);
        assert_eq!(cli.command, Some(Command::Replay { input: None }));
    }

    #[test]
    fn no_subcommand_means_play() {
        let cli = Cli::parse_from(["twenty48"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn seeded_sessions_start_identically() {
        let mut config = Config::default();
        config.game.seed = Some(5);
        config.storage.persist = false;
        let a = session_from_config(&config);
        let b = session_from_config(&config);
        assert_eq!(a.board(), b.board());
    }
}
