//! Headless driver for the remote-command channel.
//!
//! Reads one JSON message per line, funnels each through a [`CommandQueue`]
//! into the session, and writes one JSON line per message: the resulting
//! [`SessionSnapshot`](crate::session::SessionSnapshot), or `{"error": ...}`
//! for a rejected message.

use std::io::{self, BufRead, Write};

use rand::Rng;
use serde_json::json;
use thiserror::Error;

use crate::input::parse_message;
use crate::session::{CommandQueue, GameSession};
use crate::store::KeyValueStore;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read commands: {0}")]
    Read(#[source] io::Error),

    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Counts of processed input lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

pub fn replay<B, W, R, S>(
    session: &mut GameSession<R, S>,
    input: B,
    output: &mut W,
) -> Result<ReplaySummary, ReplayError>
where
    B: BufRead,
    W: Write,
    R: Rng,
    S: KeyValueStore,
{
    let queue = CommandQueue::new();
    let mut summary = ReplaySummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.map_err(ReplayError::Read)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_message(line) {
            Ok(command) => queue.push(command),
            Err(err) => {
                tracing::warn!(line = idx + 1, error = %err, "Rejected remote message");
                summary.rejected += 1;
                let body = json!({ "error": err.to_string() });
                writeln!(output, "{}", serde_json::to_string(&body)?).map_err(ReplayError::Write)?;
                continue;
            }
        }

        while let Some(command) = queue.try_next() {
            let snapshot = session.apply(command);
            summary.applied += 1;
            writeln!(output, "{}", serde_json::to_string(&snapshot)?)
                .map_err(ReplayError::Write)?;
        }
    }

    output.flush().map_err(ReplayError::Write)?;
    Ok(summary)
}
