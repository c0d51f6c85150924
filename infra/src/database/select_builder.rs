//! SQL `SELECT` builder implementing [`OrderedQuery`]
//!
//! Conditions are AND-combined. Named `:param` placeholders are rendered as
//! positional `?` with the bound values collected in order of appearance.
//! Field names given to [`SqlSelectBuilder::fields`] are translated to their
//! columns wherever the builder renders `<alias>.<field>` or an ordering.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

use reel_core::domain::value_objects::OrderDirection;
use reel_core::services::pagination::OrderedQuery;

use crate::InfrastructureError;

static NAMED_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").unwrap());
static QUALIFIED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\.([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Rendered statement with its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct SqlSelectBuilder {
    table: String,
    alias: String,
    columns: Vec<String>,
    fields: Vec<(String, String)>,
    conditions: Vec<String>,
    params: Vec<Value>,
    unbound: Vec<String>,
    orders: Vec<(String, OrderDirection)>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl SqlSelectBuilder {
    pub fn new(table: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: alias.into(),
            columns: Vec::new(),
            fields: Vec::new(),
            conditions: Vec::new(),
            params: Vec::new(),
            unbound: Vec::new(),
            orders: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Select these alias-qualified columns instead of `*`
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.columns = columns
            .into_iter()
            .map(|c| format!("{}.{}", self.alias, c.as_ref()))
            .collect();
        self
    }

    /// Maps field names used by callers to the columns backing them
    pub fn fields<I, F, C>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (F, C)>,
        F: Into<String>,
        C: Into<String>,
    {
        self.fields = fields
            .into_iter()
            .map(|(field, column)| (field.into(), column.into()))
            .collect();
        self
    }

    /// Column for `name`, or `name` itself when it is not a mapped field
    fn column<'a>(&'a self, name: &'a str) -> &'a str {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, column)| column.as_str())
            .unwrap_or(name)
    }

    /// Rewrites `<alias>.<field>` references to `<alias>.<column>`
    fn map_fields(&self, template: &str) -> String {
        if self.fields.is_empty() {
            return template.to_string();
        }

        QUALIFIED_NAME
            .replace_all(template, |caps: &Captures| {
                if &caps[1] == self.alias {
                    format!("{}.{}", self.alias, self.column(&caps[2]))
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }

    /// Renders the statement without checking parameters
    pub fn to_sql(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM {} {}",
            if self.columns.is_empty() {
                format!("{}.*", self.alias)
            } else {
                self.columns.join(", ")
            },
            self.table,
            self.alias
        );

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }

        if !self.orders.is_empty() {
            let orders: Vec<String> = self
                .orders
                .iter()
                .map(|(field, direction)| {
                    format!("{}.{} {}", self.alias, self.column(field), direction)
                })
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&orders.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }
        if let Some(offset) = self.offset {
            // MySQL requires LIMIT alongside OFFSET
            if self.limit.is_none() {
                sql.push_str(&format!(" LIMIT {}", u64::MAX));
            }
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        sql
    }

    /// Renders the statement, failing if any placeholder had no value
    pub fn build(&self) -> Result<SqlQuery, InfrastructureError> {
        if !self.unbound.is_empty() {
            return Err(InfrastructureError::General(format!(
                "unbound query parameters: {}",
                self.unbound.join(", ")
            )));
        }

        Ok(SqlQuery {
            sql: self.to_sql(),
            params: self.params.clone(),
        })
    }
}

impl OrderedQuery for SqlSelectBuilder {
    fn alias(&self) -> &str {
        &self.alias
    }

    fn where_clause(&mut self, template: &str, params: Map<String, Value>) {
        let mut bound = Vec::new();
        let mut unbound = Vec::new();

        let template = self.map_fields(template);
        let rendered = NAMED_PARAM.replace_all(&template, |caps: &Captures| {
            let name = &caps[1];
            match params.get(name) {
                Some(value) => bound.push(value.clone()),
                None => unbound.push(name.to_string()),
            }
            "?"
        });

        tracing::debug!(condition = %rendered, "Adding query condition");

        self.conditions.push(format!("({})", rendered));
        self.params.extend(bound);
        self.unbound.extend(unbound);
    }

    fn order_by(&mut self, column: &str, direction: OrderDirection) {
        self.orders = vec![(column.to_string(), direction)];
    }

    fn add_order_by(&mut self, column: &str, direction: OrderDirection) {
        self.orders.push((column.to_string(), direction));
    }

    fn take(&mut self, limit: u32) {
        self.limit = Some(limit);
    }

    fn skip(&mut self, offset: u32) {
        self.offset = Some(offset);
    }
}
