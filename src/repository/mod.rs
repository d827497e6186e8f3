//! Repository contract and the remote implementation over TheCatApi.
//!
//! Every fetch is exposed as a one-shot stream: exactly one terminal item,
//! either the payload or an error. Screen models consume the single item
//! and fold it into their published state.

use futures::stream::{self, BoxStream, StreamExt};
use thiserror::Error;

use crate::api::{ApiError, CatApiClient};
use crate::domain::{Breed, CatDetails};

/// Errors yielded by repository streams.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("cat api error: {0}")]
    Api(#[from] ApiError),
}

/// Asynchronous, possibly-failing source of cat data.
pub trait CatRepository: Send + Sync {
    /// Stream the breed listing. One terminal item per call.
    fn breeds(&self) -> BoxStream<'static, Result<Vec<Breed>, RepositoryError>>;

    /// Stream full details for a single cat image. One terminal item per call.
    fn details(&self, cat_id: &str) -> BoxStream<'static, Result<CatDetails, RepositoryError>>;
}

/// [`CatRepository`] backed by the live TheCatApi client.
pub struct RemoteCatRepository {
    client: CatApiClient,
    breeds_limit: u32,
    breeds_page: u32,
}

impl RemoteCatRepository {
    pub fn new(client: CatApiClient, breeds_limit: u32) -> Self {
        Self {
            client,
            breeds_limit,
            breeds_page: 0,
        }
    }

    /// Select which page of the breed listing [`Self::breeds`] fetches.
    pub fn with_page(mut self, page: u32) -> Self {
        self.breeds_page = page;
        self
    }
}

impl CatRepository for RemoteCatRepository {
    fn breeds(&self) -> BoxStream<'static, Result<Vec<Breed>, RepositoryError>> {
        let client = self.client.clone();
        let (limit, page) = (self.breeds_limit, self.breeds_page);

        stream::once(async move {
            let dtos = client.breeds(limit, page).await?;
            Ok(dtos.into_iter().map(Breed::from).collect())
        })
        .boxed()
    }

    fn details(&self, cat_id: &str) -> BoxStream<'static, Result<CatDetails, RepositoryError>> {
        let client = self.client.clone();
        let cat_id = cat_id.to_owned();

        stream::once(async move {
            let dto = client.image(&cat_id).await?;
            Ok(dto.into_details())
        })
        .boxed()
    }
}
