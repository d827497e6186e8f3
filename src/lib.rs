//! Cattose client core: cat breed data from TheCatApi, bridged to
//! UI-consumable state values.
//!
//! The crate is organized around two screen features (list, detail). Each
//! feature owns a tagged-union state, a pure reducer over that state, and a
//! model that drives the reducer from a repository stream and publishes the
//! result through a last-value broadcast cell.

pub mod api;
pub mod config;
pub mod domain;
pub mod nav;
pub mod repository;
pub mod screen;
