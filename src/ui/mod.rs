//! Terminal front-end: the rendering and input collaborator for a session.

pub mod app;
pub mod board_view;
pub mod events;
pub mod footer;
pub mod game_over;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
