//! Intents for the detail screen.

use crate::domain::CatDetails;
use crate::screen::mvi::Intent;

/// Fetch-lifecycle events for the detail screen.
#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A fetch cycle started.
    FetchStarted,

    /// The repository stream yielded details.
    DetailsLoaded { details: CatDetails },

    /// The repository stream faulted or ended without an item.
    LoadFailed,
}

impl Intent for DetailIntent {}
