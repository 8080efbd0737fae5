use std::fs::File;
use std::io::{self, BufReader};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use twenty48::cli::{open_store, session_from_config, Cli, Command};
use twenty48::headless::replay;
use twenty48::logging::{init_tracing, LogTarget};
use twenty48::store::{load_high_score, KeyValueStore, HIGH_SCORE_KEY};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    match cli.command.clone().unwrap_or(Command::Play) {
        Command::Play => {
            init_tracing(&config.logging.level, LogTarget::File(config.log_path()))
                .context("Failed to open log file")?;
            let session = session_from_config(&config);
            twenty48::ui::run(session, Duration::from_millis(config.ui.tick_rate_ms))?;
        }
        Command::Replay { input } => {
            init_tracing(&config.logging.level, LogTarget::Stderr)?;
            let mut session = session_from_config(&config);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = match input {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open '{}'", path.display()))?;
                    replay(&mut session, BufReader::new(file), &mut out)?
                }
                None => replay(&mut session, io::stdin().lock(), &mut out)?,
            };
            tracing::info!(
                applied = summary.applied,
                rejected = summary.rejected,
                "Replay finished"
            );
        }
        Command::HighScore { reset } => {
            init_tracing(&config.logging.level, LogTarget::Stderr)?;
            let mut store = open_store(&config);
            if reset {
                store
                    .set(HIGH_SCORE_KEY, "0")
                    .context("Failed to reset high score")?;
            }
            println!("{}", load_high_score(&store));
        }
    }

    Ok(())
}
