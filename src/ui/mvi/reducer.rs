//! Pure state transition trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition for one overlay.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
