use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOverIntent {
    /// The session just reached its terminal state.
    Show { final_score: u64, high_score: u64 },
    /// Close button, Escape, or a restart that already happened.
    Close,
    /// Move focus between the Restart and Close buttons.
    ToggleButton,
}

impl Intent for GameOverIntent {}
