//! Mock implementation of MovieRepository for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::movie::{Movie, MovieFilter};
use crate::errors::DomainError;
use crate::services::pagination::CursorPage;
use reel_shared::types::CursorPageRequest;

use super::trait_::MovieRepository;

/// Returns a fixed page and records every request it receives
pub struct MockMovieRepository {
    page: Vec<Movie>,
    pub requests: Arc<Mutex<Vec<(MovieFilter, CursorPageRequest)>>>,
}

impl MockMovieRepository {
    pub fn new(page: Vec<Movie>) -> Self {
        Self {
            page,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl MovieRepository for MockMovieRepository {
    async fn find_all(
        &self,
        filter: &MovieFilter,
        request: &CursorPageRequest,
    ) -> Result<CursorPage<Movie>, DomainError> {
        self.requests
            .lock()
            .unwrap()
            .push((filter.clone(), request.clone()));
        Ok(CursorPage::new(self.page.clone(), None))
    }
}
