//! Single-line collapse shared by all four move directions.

use super::{Cell, BOARD_SIZE};

/// Which end of a line tiles slide toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Toward {
    /// Index 0 (Left, Up).
    Start,
    /// Index `BOARD_SIZE - 1` (Right, Down).
    End,
}

/// Slide and merge one line toward `toward`.
///
/// Tiles are scanned from the leading end with a single pending slot: an
/// equal successor merges into it and the pair is consumed, so a tile that
/// was produced by a merge never merges again in the same pass.
pub(crate) fn collapse(line: [Cell; BOARD_SIZE], toward: Toward) -> [Cell; BOARD_SIZE] {
    let mut out: [Cell; BOARD_SIZE] = [None; BOARD_SIZE];
    let mut written = 0;
    let mut pending: Option<u32> = None;

    let mut emit = |value: u32| {
        let slot = match toward {
            Toward::Start => written,
            Toward::End => BOARD_SIZE - 1 - written,
        };
        out[slot] = Some(value);
        written += 1;
    };

    for step in 0..BOARD_SIZE {
        let idx = match toward {
            Toward::Start => step,
            Toward::End => BOARD_SIZE - 1 - step,
        };
        let Some(value) = line[idx] else {
            continue;
        };
        match pending {
            Some(held) if held == value => {
                debug_assert!(held.checked_mul(2).is_some(), "tile overflow");
                emit(held * 2);
                pending = None;
            }
            Some(held) => {
                emit(held);
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }
    if let Some(held) = pending {
        emit(held);
    }

    out
}
