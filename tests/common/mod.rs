//! Shared test utilities: scripted repository and mock API server.

#![allow(dead_code)]

pub mod mock_api;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::Mutex;

use cattose::api::ApiError;
use cattose::domain::{Breed, CatDetails};
use cattose::nav::{ScreenArgs, CAT_ID_ARG, IMAGE_URL_ARG};
use cattose::repository::{CatRepository, RepositoryError};

/// One scripted repository outcome.
pub enum Scripted<T> {
    /// Yield the payload, then end.
    Yield(T),
    /// Fault with a synthetic error.
    Fault,
    /// End without yielding anything (contract-violating collaborator).
    Empty,
    /// Never resolve; stands in for a fetch that outlives a restart.
    Pending,
}

impl<T: Send + 'static> Scripted<T> {
    fn into_stream(self) -> BoxStream<'static, Result<T, RepositoryError>> {
        match self {
            Scripted::Yield(value) => stream::once(async move { Ok(value) }).boxed(),
            Scripted::Fault => stream::once(async {
                Err(RepositoryError::Api(ApiError::Status {
                    status: 500,
                    url: "scripted".into(),
                }))
            })
            .boxed(),
            Scripted::Empty => stream::empty().boxed(),
            Scripted::Pending => stream::pending().boxed(),
        }
    }
}

/// Repository whose streams follow a pre-written script, one outcome per
/// call. Calls beyond the script fault.
#[derive(Default)]
pub struct ScriptedRepository {
    breeds_script: Mutex<VecDeque<Scripted<Vec<Breed>>>>,
    details_script: Mutex<VecDeque<Scripted<CatDetails>>>,
    details_calls: AtomicUsize,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_breeds(self, outcome: Scripted<Vec<Breed>>) -> Self {
        self.breeds_script.lock().push_back(outcome);
        self
    }

    pub fn script_details(self, outcome: Scripted<CatDetails>) -> Self {
        self.details_script.lock().push_back(outcome);
        self
    }

    /// How many times `details` was called.
    pub fn details_calls(&self) -> usize {
        self.details_calls.load(Ordering::SeqCst)
    }
}

impl CatRepository for ScriptedRepository {
    fn breeds(&self) -> BoxStream<'static, Result<Vec<Breed>, RepositoryError>> {
        self.breeds_script
            .lock()
            .pop_front()
            .unwrap_or(Scripted::Fault)
            .into_stream()
    }

    fn details(&self, _cat_id: &str) -> BoxStream<'static, Result<CatDetails, RepositoryError>> {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        self.details_script
            .lock()
            .pop_front()
            .unwrap_or(Scripted::Fault)
            .into_stream()
    }
}

/// Arguments for a detail screen visit.
pub fn detail_args(cat_id: &str, image_url: &str) -> ScreenArgs {
    [(CAT_ID_ARG, cat_id), (IMAGE_URL_ARG, image_url)]
        .into_iter()
        .collect()
}

/// A minimal details payload.
pub fn cat_details(id: &str) -> CatDetails {
    CatDetails {
        id: id.into(),
        image_url: format!("https://cdn.example/{id}.jpg"),
        breed: None,
    }
}

/// A minimal breed record.
pub fn breed(id: &str, name: &str) -> Breed {
    Breed {
        id: id.into(),
        name: name.into(),
        description: String::new(),
        temperament: vec![],
        image_url: None,
    }
}
