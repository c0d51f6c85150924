//! Shared fixtures for the HTTP tests

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tokio::sync::RwLock;

use reel_api::app::{AppState, SharedCache};
use reel_core::domain::entities::movie::{Movie, MovieFilter};
use reel_core::domain::entities::user::{NewUser, User};
use reel_core::domain::value_objects::{Cursor, CursorRow, OrderDirection, OrderSpec};
use reel_core::errors::{AuthError, DomainError, PaginationError};
use reel_core::repositories::{MovieRepository, UserRepository};
use reel_core::services::auth::{AuthService, AuthServiceConfig};
use reel_core::services::movie::MovieService;
use reel_core::services::pagination::{CursorPage, CursorPaginator};
use reel_core::services::token::TokenService;
use reel_infra::cache::MemoryTokenCache;
use reel_shared::config::{JwtConfig, PaginationConfig};
use reel_shared::types::CursorPageRequest;

pub const ACCESS_SECRET: &str = "test-access-secret";
pub const REFRESH_SECRET: &str = "test-refresh-secret";

pub type TestState = AppState<InMemoryUserRepository, InMemoryMovieRepository>;

/// User store keyed by email
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let now = Utc::now();
        let created = User {
            id: users.len() as i64 + 1,
            email: user.email.clone(),
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.email, created.clone());
        Ok(created)
    }
}

/// Movie table ordered and bounded by any sortable field
///
/// Movie `n` has `likeCount = (n % 3) * 10`, so ties exist and `id` breaks them.
pub struct InMemoryMovieRepository {
    movies: Vec<Movie>,
    paginator: CursorPaginator,
}

impl InMemoryMovieRepository {
    pub fn with_movies(count: i64) -> Self {
        let movies = (1..=count)
            .map(|id| {
                let at = Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap();
                Movie {
                    id,
                    title: format!("Movie {}", id),
                    like_count: (id % 3) * 10,
                    dislike_count: 0,
                    created_at: at,
                    updated_at: at,
                }
            })
            .collect();

        Self {
            movies,
            paginator: CursorPaginator::default(),
        }
    }
}

fn compare_values(a: Option<Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.as_str().cmp(b.as_str()),
        _ => Ordering::Equal,
    }
}

/// Row order under `order`, directions applied
fn compare_movies(a: &Movie, b: &Movie, order: &[OrderSpec]) -> Ordering {
    order
        .iter()
        .map(|spec| {
            let ordering = compare_values(
                a.column_value(&spec.column),
                b.column_value(&spec.column).as_ref(),
            );
            match spec.direction {
                OrderDirection::Asc => ordering,
                OrderDirection::Desc => ordering.reverse(),
            }
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Lexicographic tuple comparison of a row against the cursor boundary
fn compare_to_boundary(movie: &Movie, cursor: &Cursor) -> Ordering {
    cursor
        .boundary()
        .map(|(spec, value)| compare_values(movie.column_value(&spec.column), value))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_all(
        &self,
        filter: &MovieFilter,
        request: &CursorPageRequest,
    ) -> Result<CursorPage<Movie>, DomainError> {
        let (order, cursor) = match &request.cursor {
            Some(encoded) => {
                let cursor = self.paginator.decode_cursor(encoded)?;
                (cursor.order.clone(), Some(cursor))
            }
            None if request.order.is_empty() => (OrderSpec::parse_all(&["id_DESC"])?, None),
            None => (OrderSpec::parse_all(request.order.as_slice())?, None),
        };

        if let Some(spec) = order.iter().find(|spec| !Movie::is_sortable(&spec.column)) {
            return Err(PaginationError::InvalidOrderColumn {
                token: spec.token(),
            }
            .into());
        }

        let wanted = if order.iter().any(|spec| spec.direction == OrderDirection::Desc) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        let needle = filter.title.as_deref().unwrap_or("").to_lowercase();

        let mut movies: Vec<Movie> = self
            .movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .filter(|movie| {
                cursor
                    .as_ref()
                    .map_or(true, |cursor| compare_to_boundary(movie, cursor) == wanted)
            })
            .cloned()
            .collect();
        movies.sort_by(|a, b| compare_movies(a, b, &order));
        movies.truncate(request.take as usize);

        Ok(self.paginator.into_page(movies, &order)?)
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(ACCESS_SECRET, REFRESH_SECRET)
}

/// State over in-memory collaborators; the cache is returned for inspection
pub fn test_state(movie_count: i64) -> (web::Data<TestState>, MemoryTokenCache) {
    let cache = MemoryTokenCache::new();
    let shared: SharedCache = Arc::new(cache.clone());

    let token_service = Arc::new(TokenService::new(shared, &jwt_config()));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(InMemoryUserRepository::default()),
        token_service,
        AuthServiceConfig { hash_rounds: 4 },
    ));
    let movie_service = Arc::new(MovieService::new(
        Arc::new(InMemoryMovieRepository::with_movies(movie_count)),
        PaginationConfig::default(),
    ));

    (
        web::Data::new(AppState::new(auth_service, movie_service)),
        cache,
    )
}

pub fn basic(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", email, password)))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
