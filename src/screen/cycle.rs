//! Fetch-cycle bookkeeping for the screen models.
//!
//! Each `fetch()` is one cycle. Restarting aborts the previous cycle's task
//! and bumps a generation counter; a cycle may only publish its terminal
//! state while its generation is still current, checked and published under
//! one lock so a restart cannot slip in between the check and the publish.
//! Abort alone does not close the race: a task that has already resumed
//! from its last await runs to completion, and without the generation gate
//! its stale result would overwrite a newer cycle's state.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

#[derive(Default)]
struct Cycle {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

/// Tracks the in-flight fetch cycle for one screen model.
#[derive(Clone, Default)]
pub(crate) struct CycleSlot {
    inner: Arc<Mutex<Cycle>>,
}

impl CycleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the in-flight cycle, if any, and begin a new one.
    ///
    /// Returns the new cycle's generation.
    pub fn restart(&self) -> u64 {
        let mut cycle = self.inner.lock();
        if let Some(task) = cycle.task.take() {
            task.abort();
        }
        cycle.generation += 1;
        cycle.generation
    }

    /// Record the task driving `generation`.
    ///
    /// Aborts the task instead if a newer cycle has started since
    /// `restart` returned.
    pub fn drive(&self, generation: u64, task: JoinHandle<()>) {
        let mut cycle = self.inner.lock();
        if cycle.generation == generation {
            cycle.task = Some(task);
        } else {
            task.abort();
        }
    }

    /// Run `publish` iff `generation` is still the current cycle, and
    /// report whether it ran.
    ///
    /// The closure runs under the slot lock; it must not call back into
    /// this slot.
    pub fn finish(&self, generation: u64, publish: impl FnOnce()) -> bool {
        let cycle = self.inner.lock();
        if cycle.generation == generation {
            publish();
            true
        } else {
            false
        }
    }

    /// Abort the in-flight cycle and invalidate every outstanding
    /// generation. Called at model teardown.
    pub fn shutdown(&self) {
        let mut cycle = self.inner.lock();
        if let Some(task) = cycle.task.take() {
            task.abort();
        }
        cycle.generation += 1;
    }
}
