//! Game session: the Playing/Over state machine around one board.
//!
//! `move_tiles` and `restart` are the only mutators. Everything an input
//! source can ask for arrives as a [`GameCommand`] through [`GameSession::apply`].

mod command;

pub use command::{CommandQueue, CommandSender, GameCommand};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Direction, Score};
use crate::store::{load_high_score, save_high_score, KeyValueStore};

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    Over,
}

/// What happens after a move that leaves the board unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnPolicy {
    /// Spawn only when the move changed the board.
    #[default]
    OnChange,
    /// Spawn after every move, including null moves.
    Always,
}

impl SpawnPolicy {
    pub fn from_spawn_on_null_move(spawn_on_null_move: bool) -> Self {
        if spawn_on_null_move {
            Self::Always
        } else {
            Self::OnChange
        }
    }
}

/// Public state handed to the presentation layer after every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub board: Board,
    pub score: Score,
    pub high_score: Score,
    pub is_over: bool,
}

/// One play of the game.
///
/// Generic over the random source (so tests can make spawns deterministic)
/// and the high-score store.
pub struct GameSession<R, S> {
    board: Board,
    phase: Phase,
    score: Score,
    high_score: Score,
    spawn_policy: SpawnPolicy,
    rng: R,
    store: S,
}

impl<R: Rng, S: KeyValueStore> GameSession<R, S> {
    /// Start a session on a fresh board, reading the high score once from `store`.
    pub fn new(mut rng: R, store: S) -> Self {
        let high_score = load_high_score(&store);
        let board = Board::initialize(&mut rng);
        tracing::info!(high_score, "Session started");
        Self {
            board,
            phase: Phase::Playing,
            score: board.score(),
            high_score,
            spawn_policy: SpawnPolicy::default(),
            rng,
            store,
        }
    }

    /// Start a session on a given board. The phase is derived from the board.
    pub fn with_board(board: Board, rng: R, store: S) -> Self {
        let high_score = load_high_score(&store);
        let phase = if board.has_any_move() {
            Phase::Playing
        } else {
            Phase::Over
        };
        Self {
            board,
            phase,
            score: board.score(),
            high_score,
            spawn_policy: SpawnPolicy::default(),
            rng,
            store,
        }
    }

    pub fn spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.spawn_policy = policy;
        self
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn high_score(&self) -> Score {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board,
            score: self.score,
            high_score: self.high_score,
            is_over: self.is_over(),
        }
    }

    pub fn apply(&mut self, command: GameCommand) -> SessionSnapshot {
        match command {
            GameCommand::Move(direction) => self.move_tiles(direction),
            GameCommand::Restart => self.restart(),
        }
    }

    /// Slide the board, spawn, rescore and check for game over.
    ///
    /// Ignored while the session is over.
    pub fn move_tiles(&mut self, direction: Direction) -> SessionSnapshot {
        if self.is_over() {
            tracing::debug!(%direction, "Move ignored: game is over");
            return self.snapshot();
        }

        let next = self.board.shift(direction);
        let changed = next != self.board;
        if !changed && self.spawn_policy == SpawnPolicy::OnChange {
            tracing::debug!(%direction, "Null move, nothing spawned");
            return self.snapshot();
        }

        self.board = next.spawn(&mut self.rng);
        self.score = self.board.score();
        tracing::debug!(%direction, changed, score = self.score, "Move applied");

        if !self.board.has_any_move() {
            self.phase = Phase::Over;
            tracing::info!(
                score = self.score,
                highest_tile = self.board.highest_tile().unwrap_or(0),
                "Game over"
            );
        }

        if self.score > self.high_score {
            self.high_score = self.score;
            save_high_score(&mut self.store, self.high_score);
        }

        self.snapshot()
    }

    /// New board, back to Playing. The high score is kept.
    pub fn restart(&mut self) -> SessionSnapshot {
        self.board = Board::initialize(&mut self.rng);
        self.phase = Phase::Playing;
        self.score = self.board.score();
        tracing::info!(high_score = self.high_score, "Session restarted");
        self.snapshot()
    }
}
