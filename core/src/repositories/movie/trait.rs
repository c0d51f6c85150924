//! Movie repository trait.

use async_trait::async_trait;

use crate::domain::entities::movie::{Movie, MovieFilter};
use crate::errors::DomainError;
use crate::services::pagination::CursorPage;
use reel_shared::types::CursorPageRequest;

/// Read access to the movie catalogue
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// One cursor page of movies matching `filter`
    ///
    /// The request's cursor, when present, overrides its `order`; the
    /// returned page carries the next cursor under the effective order.
    async fn find_all(
        &self,
        filter: &MovieFilter,
        request: &CursorPageRequest,
    ) -> Result<CursorPage<Movie>, DomainError>;
}
