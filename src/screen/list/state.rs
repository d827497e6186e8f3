//! State for the list screen.

use crate::domain::Breed;
use crate::screen::mvi::ScreenState;

/// State of the breed listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    /// A fetch is in flight.
    #[default]
    Loading,

    /// The fetch completed with the listing.
    Loaded { breeds: Vec<Breed> },

    /// The fetch faulted. Retry is user-initiated.
    Failed,
}

impl ScreenState for ListState {}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// The fetched listing, if the last cycle succeeded.
    pub fn breeds(&self) -> Option<&[Breed]> {
        match self {
            Self::Loaded { breeds } => Some(breeds),
            _ => None,
        }
    }

    /// True once a fetch cycle has completed, successfully or not.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }
}
