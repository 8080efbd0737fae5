//! Board engine: grid representation and the pure move/spawn/score rules.
//!
//! Every operation takes a [`Board`] by value and returns a new one, so the
//! engine has no side effects beyond the random source handed to
//! [`Board::spawn`] and [`Board::initialize`].
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use twenty48::board::{Board, Direction};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let board = Board::initialize(&mut rng);
//! assert_eq!(board.tile_count(), 2);
//!
//! let moved = board.shift(Direction::Left);
//! assert_eq!(moved.score(), board.score());
//! ```

mod error;
mod line;

pub use error::BoardError;

use line::{collapse, Toward};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 4;

/// Largest tile a 4x4 board can reach (2^17). Accepting nothing larger keeps
/// every merge within `u32`.
pub const MAX_TILE: u32 = 1 << 17;

/// One cell: empty, or a tile holding a power of two >= 2.
pub type Cell = Option<u32>;

/// Row-major cell grid.
pub type Rows = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Sum of tile values.
pub type Score = u64;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    fn toward(self) -> Toward {
        match self {
            Self::Left | Self::Up => Toward::Start,
            Self::Right | Self::Down => Toward::End,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Returned when a direction name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts `ArrowUp`-style key names and plain `up`/`down`/`left`/`right`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_prefix("arrow").unwrap_or(&name);
        match name {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Immutable 4x4 board.
///
/// Only constructed through validated paths ([`Board::from_rows`],
/// deserialization, or the engine itself), so every tile is a power of two.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Rows", try_from = "Rows")]
pub struct Board {
    cells: Rows,
}

impl Board {
    /// A constant empty board.
    pub const EMPTY: Board = Board {
        cells: [[None; BOARD_SIZE]; BOARD_SIZE],
    };

    /// Build a board from caller rows, rejecting values that are not a power
    /// of two in `2..=MAX_TILE`.
    pub fn from_rows(cells: Rows) -> Result<Self, BoardError> {
        for (row, line) in cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if let Some(value) = *cell {
                    if !(2..=MAX_TILE).contains(&value) || !value.is_power_of_two() {
                        return Err(BoardError::InvalidTile { row, col, value });
                    }
                }
            }
        }
        Ok(Self { cells })
    }

    /// Fresh board: empty grid plus two spawned tiles.
    pub fn initialize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::EMPTY.spawn(rng).spawn(rng)
    }

    pub fn rows(&self) -> &Rows {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// A full board is returned unchanged.
    pub fn spawn<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return self;
        }
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        let value = if rng.gen_range(0..10u32) < 9 { 2 } else { 4 };
        let mut cells = self.cells;
        cells[row][col] = Some(value);
        Self { cells }
    }

    /// Slide and merge every line toward `direction`. No randomness.
    pub fn shift(self, direction: Direction) -> Self {
        let toward = direction.toward();
        if direction.is_vertical() {
            let columns = transpose(self.cells);
            Self {
                cells: transpose(columns.map(|line| collapse(line, toward))),
            }
        } else {
            Self {
                cells: self.cells.map(|line| collapse(line, toward)),
            }
        }
    }

    /// True if some move would change the board: an empty cell, or an
    /// adjacent equal pair in a row or column.
    pub fn has_any_move(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = self.cells[row][col];
                if cell.is_none() {
                    return true;
                }
                if col + 1 < BOARD_SIZE && cell == self.cells[row][col + 1] {
                    return true;
                }
                if row + 1 < BOARD_SIZE && cell == self.cells[row + 1][col] {
                    return true;
                }
            }
        }
        false
    }

    /// Sum of all tile values; empty cells count as zero.
    pub fn score(&self) -> Score {
        self.tiles().map(Score::from).sum()
    }

    /// Coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if cell.is_none() {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    pub fn count_empty(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.tile_count()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn is_full(&self) -> bool {
        self.tile_count() == BOARD_SIZE * BOARD_SIZE
    }

    /// Highest tile value, or `None` on an empty board.
    pub fn highest_tile(&self) -> Option<u32> {
        self.tiles().max()
    }

    fn tiles(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }
}

fn transpose(cells: Rows) -> Rows {
    let mut out = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (row, line) in cells.iter().enumerate() {
        for (col, cell) in line.iter().enumerate() {
            out[col][row] = *cell;
        }
    }
    out
}

impl From<Board> for Rows {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl TryFrom<Rows> for Board {
    type Error = BoardError;

    fn try_from(rows: Rows) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.cells.iter().enumerate() {
            if idx > 0 {
                writeln!(f, "{}", "-".repeat(BOARD_SIZE * 8 - 1))?;
            }
            let cells: Vec<String> = line.iter().map(format_cell).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

fn format_cell(cell: &Cell) -> String {
    match cell {
        None => " ".repeat(7),
        Some(value) => format!("{:^7}", value),
    }
}
