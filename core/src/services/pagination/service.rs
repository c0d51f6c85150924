//! Cursor and page-number pagination over an [`OrderedQuery`]

use serde_json::Map;

use crate::domain::value_objects::{Cursor, CursorRow, OrderDirection, OrderSpec};
use crate::errors::PaginationError;
use reel_shared::config::PaginationConfig;
use reel_shared::types::{CursorPageRequest, CursorPaginatedResponse, PagePagination};

use super::query::OrderedQuery;

/// One page of rows plus the cursor for the next page
pub type CursorPage<T> = CursorPaginatedResponse<T>;

/// Stateless pagination engine carrying only its defaults and bounds
#[derive(Debug, Clone, Default)]
pub struct CursorPaginator {
    config: PaginationConfig,
}

impl CursorPaginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Applies cursor pagination to `query`
    ///
    /// The effective order comes from the decoded cursor when one is
    /// present, otherwise from `request.order`, falling back to the
    /// configured default order. With a cursor, a lexicographic tuple
    /// predicate `(c1, .., cn) OP (:c1, .., :cn)` is added where `OP` is `<`
    /// if any direction is DESC and `>` otherwise. Mixed-direction order
    /// lists are therefore only approximated.
    ///
    /// # Arguments
    ///
    /// * `query` - Query builder to augment
    /// * `request` - Cursor, order tokens and page size
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<OrderSpec>)` - The effective order, needed to build the next cursor
    /// * `Err(PaginationError)` - Malformed cursor or invalid order token
    pub fn apply_cursor_pagination<Q>(
        &self,
        query: &mut Q,
        request: &CursorPageRequest,
    ) -> Result<Vec<OrderSpec>, PaginationError>
    where
        Q: OrderedQuery + ?Sized,
    {
        let order = match request.cursor.as_deref() {
            Some(encoded) => {
                let cursor = Cursor::decode(encoded)?;
                Self::apply_boundary(query, &cursor);
                cursor.order
            }
            None if request.order.is_empty() => OrderSpec::parse_all(&self.config.default_order)?,
            None => OrderSpec::parse_all(&request.order)?,
        };

        query.take(self.config.clamp_take(Some(request.take)));

        let mut specs = order.iter();
        if let Some(primary) = specs.next() {
            query.order_by(&primary.column, primary.direction);
        }
        for spec in specs {
            query.add_order_by(&spec.column, spec.direction);
        }

        tracing::debug!(
            order = ?order.iter().map(OrderSpec::token).collect::<Vec<_>>(),
            has_cursor = request.cursor.is_some(),
            "Applied cursor pagination"
        );

        Ok(order)
    }

    /// Applies page-number pagination: `take(take)` then `skip((page - 1) * take)`
    pub fn apply_page_pagination<Q>(&self, query: &mut Q, page: &PagePagination)
    where
        Q: OrderedQuery + ?Sized,
    {
        let take = self.config.clamp_take(Some(page.take));
        query.take(take);
        query.skip(page.page.saturating_sub(1).saturating_mul(take));
    }

    pub fn decode_cursor(&self, encoded: &str) -> Result<Cursor, PaginationError> {
        Cursor::decode(encoded)
    }

    /// Encodes the order columns of `row` together with `order`
    pub fn encode_cursor<R>(&self, row: &R, order: &[OrderSpec]) -> Result<String, PaginationError>
    where
        R: CursorRow + ?Sized,
    {
        Ok(Cursor::from_row(row, order)?.encode())
    }

    /// Cursor positioned after the last row, `None` for an empty page
    pub fn generate_next_cursor<R>(
        &self,
        results: &[R],
        order: &[OrderSpec],
    ) -> Result<Option<String>, PaginationError>
    where
        R: CursorRow,
    {
        results
            .last()
            .map(|row| self.encode_cursor(row, order))
            .transpose()
    }

    /// Wraps fetched rows into a page with its next cursor
    pub fn into_page<R>(
        &self,
        rows: Vec<R>,
        order: &[OrderSpec],
    ) -> Result<CursorPage<R>, PaginationError>
    where
        R: CursorRow,
    {
        let next_cursor = self.generate_next_cursor(&rows, order)?;
        Ok(CursorPage::new(rows, next_cursor))
    }

    fn apply_boundary<Q>(query: &mut Q, cursor: &Cursor)
    where
        Q: OrderedQuery + ?Sized,
    {
        let operator = if cursor
            .order
            .iter()
            .any(|spec| spec.direction == OrderDirection::Desc)
        {
            "<"
        } else {
            ">"
        };

        let alias = query.alias().to_string();
        let mut columns = Vec::with_capacity(cursor.order.len());
        let mut placeholders = Vec::with_capacity(cursor.order.len());
        let mut params = Map::with_capacity(cursor.order.len());

        for (spec, value) in cursor.boundary() {
            columns.push(format!("{}.{}", alias, spec.column));
            placeholders.push(format!(":{}", spec.column));
            params.insert(spec.column.clone(), value.cloned().unwrap_or_default());
        }

        let template = format!(
            "({}) {} ({})",
            columns.join(", "),
            operator,
            placeholders.join(", ")
        );
        query.where_clause(&template, params);
    }
}
