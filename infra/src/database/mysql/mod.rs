//! MySQL repository implementations

pub mod movie_repository_impl;
pub mod user_repository_impl;

pub use movie_repository_impl::MySqlMovieRepository;
pub use user_repository_impl::MySqlUserRepository;

use serde_json::Value;
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::MySql;

/// Binds a JSON value with the closest MySQL type
pub(crate) fn bind_json<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    value: Value,
) -> Query<'q, MySql, MySqlArguments> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else if let Some(u) = n.as_u64() {
                query.bind(u)
            } else {
                query.bind(n.as_f64().unwrap_or_default())
            }
        }
        Value::String(s) => query.bind(s),
        other => query.bind(other.to_string()),
    }
}
