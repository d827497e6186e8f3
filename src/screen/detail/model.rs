//! Screen model for the detail screen.

use std::sync::Arc;

use futures::StreamExt;
use tracing::warn;

use crate::nav::{ArgsError, ScreenArgs, CAT_ID_ARG, IMAGE_URL_ARG};
use crate::repository::CatRepository;
use crate::screen::cell::{state_cell, StateCell, StateWriter};
use crate::screen::cycle::CycleSlot;
use crate::screen::mvi::Reducer;

use super::intent::DetailIntent;
use super::reducer::DetailReducer;
use super::state::DetailState;

/// Bridges the detail repository stream to a published [`DetailState`].
///
/// One instance per screen visit. Construction reads the required arguments
/// and triggers the first fetch, so observers see `Loading` immediately.
pub struct DetailModel {
    repository: Arc<dyn CatRepository>,
    cat_id: String,
    writer: StateWriter<DetailState>,
    cell: StateCell<DetailState>,
    cycle: CycleSlot,
}

impl DetailModel {
    /// Create the model and start the first fetch.
    ///
    /// # Errors
    /// Returns [`ArgsError::Missing`] if `catId` or `imageUrl` is absent.
    /// That is a caller contract violation; no state is published.
    pub fn new(repository: Arc<dyn CatRepository>, args: &ScreenArgs) -> Result<Self, ArgsError> {
        let cat_id = args.require(CAT_ID_ARG)?;
        let image_url = args.require(IMAGE_URL_ARG)?;

        let (writer, cell) = state_cell(DetailState::Loading { image_url });
        let model = Self {
            repository,
            cat_id,
            writer,
            cell,
            cycle: CycleSlot::new(),
        };
        model.fetch();
        Ok(model)
    }

    /// Read handle for the published state.
    pub fn state(&self) -> StateCell<DetailState> {
        self.cell.clone()
    }

    /// Start a fetch cycle.
    ///
    /// Publishes `Loading` synchronously, then resolves the repository
    /// stream's single terminal item in a background task. The previous
    /// cycle is aborted and its generation invalidated, so a stale result
    /// can never be published over a newer cycle's state even if the old
    /// task was already past its last await when the restart happened.
    pub fn fetch(&self) {
        let generation = self.cycle.restart();

        self.writer.publish(DetailReducer::reduce(
            self.writer.current(),
            DetailIntent::FetchStarted,
        ));

        let mut stream = self.repository.details(&self.cat_id);
        let writer = self.writer.clone();
        let cycle = self.cycle.clone();

        let task = tokio::spawn(async move {
            let intent = match stream.next().await {
                Some(Ok(details)) => DetailIntent::DetailsLoaded { details },
                Some(Err(error)) => {
                    warn!(%error, "detail fetch failed");
                    DetailIntent::LoadFailed
                }
                None => {
                    warn!("detail stream ended without an item");
                    DetailIntent::LoadFailed
                }
            };
            cycle.finish(generation, || {
                writer.publish(DetailReducer::reduce(writer.current(), intent));
            });
        });
        self.cycle.drive(generation, task);
    }
}

impl std::fmt::Debug for DetailModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailModel")
            .field("cat_id", &self.cat_id)
            .finish_non_exhaustive()
    }
}

impl Drop for DetailModel {
    fn drop(&mut self) {
        self.cycle.shutdown();
    }
}
