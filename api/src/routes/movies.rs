//! Movie listing route

use actix_web::{web, HttpResponse};

use reel_core::repositories::{MovieRepository, UserRepository};

use crate::app::AppState;
use crate::dto::movie::MovieListQuery;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /api/v1/movies
///
/// `?title=&cursor=&order=likeCount_DESC,id_DESC&take=10`
///
/// Responds with `{ data, nextCursor, count }`. Pass `nextCursor` back as
/// `cursor` to fetch the following page; the cursor's embedded order wins
/// over `order`.
pub async fn list_movies<U, M>(
    state: web::Data<AppState<U, M>>,
    query: web::Query<MovieListQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MovieRepository + 'static,
{
    match state
        .movie_service
        .find_all(query.filter(), query.page_request())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(&error),
    }
}
