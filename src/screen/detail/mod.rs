//! Detail screen: full details for one cat image.

mod intent;
mod model;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use model::DetailModel;
pub use reducer::DetailReducer;
pub use state::DetailState;
