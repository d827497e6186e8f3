//! Screen state machinery.
//!
//! ```text
//! Repository ──stream──→ Model ──intent──→ Reducer ──state──→ StateCell ──→ observers
//! ```
//!
//! - **State**: immutable, tagged-union representation of what a screen shows
//! - **Intent**: fetch lifecycle events fed to the reducer
//! - **Reducer**: pure function `(State, Intent) -> State`
//! - **Model**: subscribes to the repository stream and publishes reduced
//!   states through a [`cell::StateCell`]

pub mod cell;
pub(crate) mod cycle;
pub mod detail;
pub mod list;
pub mod mvi;
