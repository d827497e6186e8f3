//! Screen model for the list screen.

use std::sync::Arc;

use futures::StreamExt;
use tracing::warn;

use crate::repository::CatRepository;
use crate::screen::cell::{state_cell, StateCell, StateWriter};
use crate::screen::cycle::CycleSlot;
use crate::screen::mvi::Reducer;

use super::intent::ListIntent;
use super::reducer::ListReducer;
use super::state::ListState;

/// Bridges the breed-listing stream to a published [`ListState`].
///
/// One instance per screen visit; construction triggers the first fetch.
pub struct ListModel {
    repository: Arc<dyn CatRepository>,
    writer: StateWriter<ListState>,
    cell: StateCell<ListState>,
    cycle: CycleSlot,
}

impl ListModel {
    /// Create the model and start the first fetch.
    pub fn new(repository: Arc<dyn CatRepository>) -> Self {
        let (writer, cell) = state_cell(ListState::Loading);
        let model = Self {
            repository,
            writer,
            cell,
            cycle: CycleSlot::new(),
        };
        model.fetch();
        model
    }

    /// Read handle for the published state.
    pub fn state(&self) -> StateCell<ListState> {
        self.cell.clone()
    }

    /// Start a fetch cycle. See [`crate::screen::detail::DetailModel::fetch`]
    /// for the restart discipline; the two models share it.
    pub fn fetch(&self) {
        let generation = self.cycle.restart();

        self.writer.publish(ListReducer::reduce(
            self.writer.current(),
            ListIntent::FetchStarted,
        ));

        let mut stream = self.repository.breeds();
        let writer = self.writer.clone();
        let cycle = self.cycle.clone();

        let task = tokio::spawn(async move {
            let intent = match stream.next().await {
                Some(Ok(breeds)) => ListIntent::BreedsLoaded { breeds },
                Some(Err(error)) => {
                    warn!(%error, "breed listing fetch failed");
                    ListIntent::LoadFailed
                }
                None => {
                    warn!("breed stream ended without an item");
                    ListIntent::LoadFailed
                }
            };
            cycle.finish(generation, || {
                writer.publish(ListReducer::reduce(writer.current(), intent));
            });
        });
        self.cycle.drive(generation, task);
    }
}

impl Drop for ListModel {
    fn drop(&mut self) {
        self.cycle.shutdown();
    }
}
