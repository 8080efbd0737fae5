//! Shared board fixtures and session builders.

#![allow(dead_code, unused_imports)]

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use twenty48::board::{Board, Rows, BOARD_SIZE};
use twenty48::session::GameSession;
use twenty48::store::{KeyValueStore, MemoryStore, StoreError};

/// Build a board from plain numbers; `0` is an empty cell.
pub fn board(values: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Board {
    let rows: Rows = values.map(|line| line.map(|v| if v == 0 { None } else { Some(v) }));
    Board::from_rows(rows).expect("fixture must hold valid tiles")
}

/// Plain numbers back out of a board; `0` for empty cells.
pub fn values(board: &Board) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
    board.rows().map(|line| line.map(|cell| cell.unwrap_or(0)))
}

/// Full board with no equal neighbours.
pub fn dead_board() -> Board {
    board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
}

/// One empty cell at (0, 3). Sliding right moves the gap to (0, 0); whatever
/// spawns there (2 or 4) leaves the board without a move.
pub fn one_move_from_dead() -> Board {
    board([
        [8, 16, 32, 0],
        [16, 32, 64, 128],
        [8, 16, 32, 64],
        [16, 32, 64, 128],
    ])
}

/// Always picks the first empty cell and spawns a 2.
pub fn first_cell_rng() -> StepRng {
    StepRng::new(0, 0)
}

pub fn seeded_session(seed: u64) -> GameSession<StdRng, MemoryStore> {
    GameSession::new(StdRng::seed_from_u64(seed), MemoryStore::new())
}

pub fn fixed_session(board: Board) -> GameSession<StepRng, MemoryStore> {
    GameSession::with_board(board, first_cell_rng(), MemoryStore::new())
}

/// Store whose reads and writes always fail, like an unwritable data dir.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub set_attempts: usize,
}

impl FailingStore {
    fn error() -> StoreError {
        StoreError::Io {
            path: PathBuf::from("/unavailable/scores.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(Self::error())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        self.set_attempts += 1;
        Err(Self::error())
    }
}
