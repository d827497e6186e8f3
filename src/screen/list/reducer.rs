//! Reducer for the list screen.

use crate::screen::mvi::Reducer;

use super::intent::ListIntent;
use super::state::ListState;

/// Reducer for list screen state transitions.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::FetchStarted => ListState::Loading,
            ListIntent::BreedsLoaded { breeds } => ListState::Loaded { breeds },
            ListIntent::LoadFailed => ListState::Failed,
        }
    }
}
