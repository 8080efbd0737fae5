mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_game_over_dialog;
pub use intent::GameOverIntent;
pub use reducer::GameOverReducer;
pub use state::{DialogButton, GameOverDialogState};
