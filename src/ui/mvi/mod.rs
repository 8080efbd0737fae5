//! Model-View-Intent primitives for front-end overlays.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Overlay state (the game-over dialog) changes only through a reducer.
//! The game itself is owned by [`GameSession`](crate::session::GameSession).

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
