//! Intents for the list screen.

use crate::domain::Breed;
use crate::screen::mvi::Intent;

/// Fetch-lifecycle events for the list screen.
#[derive(Debug, Clone)]
pub enum ListIntent {
    /// A fetch cycle started.
    FetchStarted,

    /// The repository stream yielded the breed listing.
    BreedsLoaded { breeds: Vec<Breed> },

    /// The repository stream faulted or ended without an item.
    LoadFailed,
}

impl Intent for ListIntent {}
