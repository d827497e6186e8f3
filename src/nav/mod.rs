//! Screen arguments.
//!
//! Navigation hands each screen a small bag of string identifiers. Models
//! read them once at construction; a missing required key is a caller
//! contract violation and fails construction outright, it is never surfaced
//! as a recoverable UI state.

use std::collections::HashMap;

use thiserror::Error;

/// Key for the cat image id the detail screen loads.
pub const CAT_ID_ARG: &str = "catId";

/// Key for the image url known before full details arrive.
pub const IMAGE_URL_ARG: &str = "imageUrl";

/// Errors for required-argument lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing required screen argument '{key}'")]
    Missing { key: String },
}

/// String arguments scoped to a single screen visit.
#[derive(Debug, Clone, Default)]
pub struct ScreenArgs {
    values: HashMap<String, String>,
}

impl ScreenArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an argument, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up an optional argument.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a required argument.
    ///
    /// # Errors
    /// Returns [`ArgsError::Missing`] if the key is absent.
    pub fn require(&self, key: &str) -> Result<String, ArgsError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| ArgsError::Missing { key: key.into() })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ScreenArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
