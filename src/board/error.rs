use thiserror::Error;

use super::MAX_TILE;

/// A board built from outside data broke the tile invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("tile at ({row}, {col}) is {value}, expected a power of two from 2 to {max}", max = MAX_TILE)]
    InvalidTile { row: usize, col: usize, value: u32 },
}
