//! Movie listing over the cursor pagination engine

use std::sync::Arc;

use crate::domain::entities::movie::{Movie, MovieFilter};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::MovieRepository;
use crate::services::pagination::CursorPage;
use reel_shared::config::PaginationConfig;
use reel_shared::types::CursorPageRequest;

pub struct MovieService<M: MovieRepository> {
    repository: Arc<M>,
    pagination: PaginationConfig,
}

impl<M: MovieRepository> MovieService<M> {
    pub fn new(repository: Arc<M>, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// One page of movies
    ///
    /// `take` must be positive and is capped at the configured maximum.
    pub async fn find_all(
        &self,
        filter: MovieFilter,
        mut request: CursorPageRequest,
    ) -> DomainResult<CursorPage<Movie>> {
        if request.take == 0 {
            return Err(DomainError::Validation {
                message: "take must be a positive integer".to_string(),
            });
        }
        request.take = self.pagination.clamp_take(Some(request.take));

        self.repository.find_all(&filter, &request).await
    }
}
