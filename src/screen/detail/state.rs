//! State for the detail screen.

use crate::domain::CatDetails;
use crate::screen::mvi::ScreenState;

/// State of the detail screen.
///
/// The image url is known from navigation before details arrive, so every
/// variant carries it; the header image renders in all three phases.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// A fetch is in flight.
    Loading { image_url: String },

    /// The fetch completed with details.
    Loaded {
        image_url: String,
        details: CatDetails,
    },

    /// The fetch faulted. No payload; retry is user-initiated.
    Failed { image_url: String },
}

impl ScreenState for DetailState {}

impl DetailState {
    /// The display-only image url, available in every phase.
    pub fn image_url(&self) -> &str {
        match self {
            Self::Loading { image_url }
            | Self::Loaded { image_url, .. }
            | Self::Failed { image_url } => image_url,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The fetched details, if the last cycle succeeded.
    pub fn details(&self) -> Option<&CatDetails> {
        match self {
            Self::Loaded { details, .. } => Some(details),
            _ => None,
        }
    }

    /// True once a fetch cycle has completed, successfully or not.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }
}
