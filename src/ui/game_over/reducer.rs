use crate::ui::game_over::intent::GameOverIntent;
use crate::ui::game_over::state::{DialogButton, GameOverDialogState};
use crate::ui::mvi::Reducer;

pub struct GameOverReducer;

impl Reducer for GameOverReducer {
    type State = GameOverDialogState;
    type Intent = GameOverIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameOverIntent::Show {
                final_score,
                high_score,
            } => GameOverDialogState::Visible {
                final_score,
                high_score,
                selected: DialogButton::Restart,
            },
            GameOverIntent::Close => GameOverDialogState::Hidden,
            GameOverIntent::ToggleButton => match state {
                GameOverDialogState::Visible {
                    final_score,
                    high_score,
                    selected,
                } => GameOverDialogState::Visible {
                    final_score,
                    high_score,
                    selected: match selected {
                        DialogButton::Restart => DialogButton::Close,
                        DialogButton::Close => DialogButton::Restart,
                    },
                },
                other => other,
            },
        }
    }
}
