//! Input collaborators. Each source turns raw events into [`GameCommand`]s
//! (or front-end actions) and nothing else.
//!
//! [`GameCommand`]: crate::session::GameCommand

pub mod gesture;
pub mod keymap;
pub mod remote;

pub use gesture::GestureTracker;
pub use keymap::{InputAction, KeyBinding, KeyMap};
pub use remote::{parse_message, RemoteError, RemoteMessage};
