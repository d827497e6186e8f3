//! Reducer primitives for unidirectional screen dataflow.

/// Marker trait for screen state values.
///
/// States are immutable: a transition clones-and-replaces, never mutates.
/// `PartialEq` lets observers and tests detect changes by value.
pub trait ScreenState: Clone + PartialEq + Send + Sync + 'static {}

/// Marker trait for intents.
///
/// Intents here are fetch-lifecycle events: a fetch started, the stream
/// yielded a payload, the stream faulted.
pub trait Intent: Send + 'static {}

/// Transforms state in response to intents.
///
/// The reducer is the only place state transitions happen, and it must be a
/// pure function of `(state, intent)`.
pub trait Reducer {
    type State: ScreenState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
