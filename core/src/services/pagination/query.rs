//! Ordered-query collaborator trait

use serde_json::{Map, Value};

use crate::domain::value_objects::OrderDirection;

/// Query builder the pagination engine augments
///
/// Predicate templates reference columns as `<alias>.<column>` and
/// parameters as `:<name>`, with the values supplied in `params`.
/// The result set must preserve the declared ordering.
pub trait OrderedQuery {
    /// Table alias used to qualify columns in predicate templates
    fn alias(&self) -> &str;

    /// Adds a filter condition
    fn where_clause(&mut self, template: &str, params: Map<String, Value>);

    /// Sets the primary ordering, replacing any previous one
    fn order_by(&mut self, column: &str, direction: OrderDirection);

    /// Appends a tie-break ordering after the existing ones
    fn add_order_by(&mut self, column: &str, direction: OrderDirection);

    /// Limits the number of returned rows
    fn take(&mut self, limit: u32);

    /// Skips rows before the first returned one
    fn skip(&mut self, offset: u32);
}
