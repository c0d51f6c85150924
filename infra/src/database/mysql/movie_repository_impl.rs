//! MySQL implementation of the MovieRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::{MySqlPool, Row};

use reel_core::domain::entities::movie::{Movie, MovieFilter};
use reel_core::errors::{DomainError, PaginationError};
use reel_core::repositories::MovieRepository;
use reel_core::services::pagination::{CursorPage, CursorPaginator, OrderedQuery};
use reel_shared::types::CursorPageRequest;

use super::bind_json;
use crate::database::SqlSelectBuilder;

/// Cursor-paginated movie listing over the `movie` table
pub struct MySqlMovieRepository {
    pool: MySqlPool,
    paginator: CursorPaginator,
}

impl MySqlMovieRepository {
    pub fn new(pool: MySqlPool, paginator: CursorPaginator) -> Self {
        Self { pool, paginator }
    }

    /// Builds the listing query; returns it with the effective order
    ///
    /// Order and cursor fields use the API names of [`Movie::SORT_FIELDS`];
    /// the builder renders them as their columns.
    pub fn build_query(
        &self,
        filter: &MovieFilter,
        request: &CursorPageRequest,
    ) -> Result<(SqlSelectBuilder, Vec<reel_core::OrderSpec>), DomainError> {
        let mut builder = SqlSelectBuilder::new("movie", "movie")
            .columns(Movie::SORT_FIELDS.iter().map(|(_, column)| *column))
            .fields(Movie::SORT_FIELDS);

        if let Some(pattern) = filter.title_pattern() {
            let mut params = Map::new();
            params.insert("title".to_string(), Value::String(pattern));
            builder.where_clause("movie.title LIKE :title", params);
        }

        let order = self.paginator.apply_cursor_pagination(&mut builder, request)?;

        if let Some(spec) = order.iter().find(|spec| !Movie::is_sortable(&spec.column)) {
            return Err(PaginationError::InvalidOrderColumn {
                token: spec.token(),
            }
            .into());
        }

        Ok((builder, order))
    }

    fn row_to_movie(row: &sqlx::mysql::MySqlRow) -> Result<Movie, sqlx::Error> {
        Ok(Movie {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            like_count: row.try_get("like_count")?,
            dislike_count: row.try_get("dislike_count")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }
}

#[async_trait]
impl MovieRepository for MySqlMovieRepository {
    async fn find_all(
        &self,
        filter: &MovieFilter,
        request: &CursorPageRequest,
    ) -> Result<CursorPage<Movie>, DomainError> {
        let (builder, order) = self.build_query(filter, request)?;
        let query = builder.build()?;

        let mut statement = sqlx::query(&query.sql);
        for param in query.params {
            statement = bind_json(statement, param);
        }

        let rows = statement.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Movie query failed: {}", e);
            DomainError::internal(e)
        })?;

        let movies = rows
            .iter()
            .map(Self::row_to_movie)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DomainError::internal)?;

        tracing::debug!(count = movies.len(), "Fetched movie page");

        Ok(self.paginator.into_page(movies, &order)?)
    }
}
