//! Reducer for the detail screen.

use crate::screen::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailState;

/// Reducer for detail screen state transitions.
///
/// `FetchStarted` re-enters `Loading` from any state; the image url is the
/// only field that survives a transition.
pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let image_url = state.image_url().to_owned();

        match intent {
            DetailIntent::FetchStarted => DetailState::Loading { image_url },

            DetailIntent::DetailsLoaded { details } => DetailState::Loaded { image_url, details },

            DetailIntent::LoadFailed => DetailState::Failed { image_url },
        }
    }
}
