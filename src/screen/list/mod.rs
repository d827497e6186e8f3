//! List screen: the breed listing.

mod intent;
mod model;
mod reducer;
mod state;

pub use intent::ListIntent;
pub use model::ListModel;
pub use reducer::ListReducer;
pub use state::ListState;
