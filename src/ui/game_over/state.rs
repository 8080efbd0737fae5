use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    #[default]
    Restart,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameOverDialogState {
    #[default]
    Hidden,
    Visible {
        final_score: u64,
        high_score: u64,
        selected: DialogButton,
    },
}

impl UiState for GameOverDialogState {}

impl GameOverDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn selected(&self) -> Option<DialogButton> {
        match self {
            Self::Visible { selected, .. } => Some(*selected),
            Self::Hidden => None,
        }
    }

    /// True when the final score set (or tied) the high score.
    pub fn is_high_score(&self) -> bool {
        match self {
            Self::Visible {
                final_score,
                high_score,
                ..
            } => *final_score > 0 && final_score >= high_score,
            Self::Hidden => false,
        }
    }
}
