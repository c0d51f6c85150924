//! Tests for the SQL select builder

use serde_json::{json, Map, Value};

use crate::database::SqlSelectBuilder;
use reel_core::domain::value_objects::{OrderDirection, OrderSpec};
use reel_core::services::pagination::{CursorPaginator, OrderedQuery};
use reel_shared::types::{CursorPageRequest, PagePagination};

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[test]
fn test_plain_select() {
    let builder = SqlSelectBuilder::new("movie", "movie").columns(["id", "title"]);
    assert_eq!(builder.to_sql(), "SELECT movie.id, movie.title FROM movie movie");

    let builder = SqlSelectBuilder::new("movie", "m");
    assert_eq!(builder.to_sql(), "SELECT m.* FROM movie m");
}

#[test]
fn test_named_params_become_positional() {
    let mut builder = SqlSelectBuilder::new("movie", "movie");
    builder.where_clause(
        "(movie.like_count, movie.id) < (:like_count, :id)",
        params(json!({"id": 5, "like_count": 10})),
    );

    let query = builder.build().unwrap();
    assert_eq!(
        query.sql,
        "SELECT movie.* FROM movie movie WHERE ((movie.like_count, movie.id) < (?, ?))"
    );
    assert_eq!(query.params, vec![json!(10), json!(5)]);
}

#[test]
fn test_conditions_are_and_combined() {
    let mut builder = SqlSelectBuilder::new("movie", "movie");
    builder.where_clause("movie.title LIKE :title", params(json!({"title": "%a%"})));
    builder.where_clause("(movie.id) > (:id)", params(json!({"id": 3})));

    let query = builder.build().unwrap();
    assert!(query
        .sql
        .ends_with("WHERE (movie.title LIKE ?) AND ((movie.id) > (?))"));
    assert_eq!(query.params, vec![json!("%a%"), json!(3)]);
}

#[test]
fn test_unbound_param_fails_build() {
    let mut builder = SqlSelectBuilder::new("movie", "movie");
    builder.where_clause("movie.id = :id", Map::new());

    assert!(builder.build().is_err());
}

#[test]
fn test_order_limit_offset() {
    let mut builder = SqlSelectBuilder::new("movie", "movie");
    builder.order_by("title", OrderDirection::Asc);
    builder.order_by("like_count", OrderDirection::Desc);
    builder.add_order_by("id", OrderDirection::Desc);
    builder.take(10);
    builder.skip(20);

    assert_eq!(
        builder.to_sql(),
        "SELECT movie.* FROM movie movie ORDER BY movie.like_count DESC, movie.id DESC LIMIT 10 OFFSET 20"
    );
}

#[test]
fn test_cursor_pagination_renders_boundary() {
    let paginator = CursorPaginator::default();
    let order = OrderSpec::parse_all(&["like_count_DESC", "id_DESC"]).unwrap();
    let cursor = paginator
        .encode_cursor(&json!({"like_count": 10, "id": 5}), &order)
        .unwrap();

    let mut builder = SqlSelectBuilder::new("movie", "movie");
    paginator
        .apply_cursor_pagination(&mut builder, &CursorPageRequest::after(cursor, 2))
        .unwrap();

    let query = builder.build().unwrap();
    assert_eq!(
        query.sql,
        "SELECT movie.* FROM movie movie \
         WHERE ((movie.like_count, movie.id) < (?, ?)) \
         ORDER BY movie.like_count DESC, movie.id DESC LIMIT 2"
    );
    assert_eq!(query.params, vec![json!(10), json!(5)]);
}

#[test]
fn test_page_pagination_renders_offset() {
    let paginator = CursorPaginator::default();
    let mut builder = SqlSelectBuilder::new("movie", "movie");

    paginator.apply_page_pagination(&mut builder, &PagePagination::new(2, 10));

    assert!(builder.to_sql().ends_with("LIMIT 10 OFFSET 10"));
}

#[test]
fn test_mapped_fields_render_as_columns() {
    let mut builder = SqlSelectBuilder::new("movie", "movie")
        .fields([("likeCount", "like_count"), ("createdAt", "created_at")]);
    builder.where_clause(
        "(movie.likeCount, movie.id) < (:likeCount, :id)",
        params(json!({"id": 5, "likeCount": 10})),
    );
    builder.order_by("likeCount", OrderDirection::Desc);
    builder.add_order_by("id", OrderDirection::Desc);

    let query = builder.build().unwrap();
    assert_eq!(
        query.sql,
        "SELECT movie.* FROM movie movie \
         WHERE ((movie.like_count, movie.id) < (?, ?)) \
         ORDER BY movie.like_count DESC, movie.id DESC"
    );
    assert_eq!(query.params, vec![json!(10), json!(5)]);
}

#[test]
fn test_field_mapping_ignores_other_aliases() {
    let mut builder =
        SqlSelectBuilder::new("movie", "movie").fields([("likeCount", "like_count")]);
    builder.where_clause("other.likeCount = :n", params(json!({"n": 1})));

    assert!(builder.to_sql().ends_with("WHERE (other.likeCount = ?)"));
}
