//! twenty48: a 2048 engine with a terminal front-end.
//!
//! - [`board`]: pure grid rules (shift/merge, spawn, terminal detection, score)
//! - [`session`]: the Playing/Over state machine, high score, command queue
//! - [`input`]: key table, drag gestures, remote JSON commands
//! - [`store`]: key-value persistence for the high score
//! - [`ui`]: ratatui front-end; [`headless`]: line-oriented remote driver
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use twenty48::board::Direction;
//! use twenty48::session::GameSession;
//! use twenty48::store::MemoryStore;
//!
//! let mut session = GameSession::new(StdRng::seed_from_u64(7), MemoryStore::new());
//! let snapshot = session.move_tiles(Direction::Left);
//! assert!(!snapshot.is_over);
//! assert_eq!(snapshot.score, snapshot.board.score());
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod headless;
pub mod input;
pub mod logging;
pub mod session;
pub mod store;
pub mod ui;
