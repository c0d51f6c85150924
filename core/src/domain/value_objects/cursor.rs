//! Cursor value object and the `column_DIRECTION` order grammar
//!
//! Wire format: `base64(JSON({"values": {column: value, ..}, "order": ["column_DIR", ..]}))`.
//! The embedded order defines tie-break precedence; its first entry is the
//! primary sort key.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;

use crate::errors::PaginationError;

static COLUMN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap()
});

/// Sort direction of a single order column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    /// Parses the exact, case-sensitive `ASC` / `DESC` words
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "ASC" => Some(OrderDirection::Asc),
            "DESC" => Some(OrderDirection::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `column_DIRECTION` entry of an order list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderSpec {
    pub column: String,
    pub direction: OrderDirection,
}

impl OrderSpec {
    pub fn new(column: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Parses a `column_DIRECTION` token
    ///
    /// The token is split on its last underscore, so `like_count_DESC`
    /// yields column `like_count`.
    ///
    /// # Errors
    ///
    /// * `InvalidOrderDirection` - no underscore, or the suffix is not exactly `ASC`/`DESC`
    /// * `InvalidOrderColumn` - the column is not a plain SQL identifier
    pub fn parse(token: &str) -> Result<Self, PaginationError> {
        let (column, word) =
            token
                .rsplit_once('_')
                .ok_or_else(|| PaginationError::InvalidOrderDirection {
                    token: token.to_string(),
                })?;

        let direction =
            OrderDirection::parse(word).ok_or_else(|| PaginationError::InvalidOrderDirection {
                token: token.to_string(),
            })?;

        if !COLUMN_PATTERN.is_match(column) {
            return Err(PaginationError::InvalidOrderColumn {
                token: token.to_string(),
            });
        }

        Ok(Self::new(column, direction))
    }

    /// Parses every token, failing on the first invalid one
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Self>, PaginationError> {
        tokens.iter().map(|t| Self::parse(t.as_ref())).collect()
    }

    pub fn token(&self) -> String {
        format!("{}_{}", self.column, self.direction)
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.column, self.direction)
    }
}

/// Row type a cursor can be projected from
pub trait CursorRow {
    /// Value of `column` on this row, `None` if the row has no such column
    fn column_value(&self, column: &str) -> Option<Value>;
}

impl CursorRow for Value {
    fn column_value(&self, column: &str) -> Option<Value> {
        self.get(column).cloned()
    }
}

impl CursorRow for Map<String, Value> {
    fn column_value(&self, column: &str) -> Option<Value> {
        self.get(column).cloned()
    }
}

/// Decoded position marker: boundary values plus the order they were produced under
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    /// Boundary row values keyed by column, in order-list sequence
    pub values: Map<String, Value>,
    pub order: Vec<OrderSpec>,
}

impl Cursor {
    /// Projects the order columns out of `row`
    ///
    /// # Errors
    ///
    /// `InvalidOrderColumn` if the row has no value for an order column.
    pub fn from_row<R: CursorRow + ?Sized>(
        row: &R,
        order: &[OrderSpec],
    ) -> Result<Self, PaginationError> {
        let mut values = Map::with_capacity(order.len());
        for spec in order {
            let value = row
                .column_value(&spec.column)
                .ok_or_else(|| PaginationError::InvalidOrderColumn {
                    token: spec.token(),
                })?;
            values.insert(spec.column.clone(), value);
        }

        Ok(Self {
            values,
            order: order.to_vec(),
        })
    }

    /// Boundary values in order-list sequence
    pub fn boundary(&self) -> impl Iterator<Item = (&OrderSpec, Option<&Value>)> {
        self.order
            .iter()
            .map(move |spec| (spec, self.values.get(&spec.column)))
    }

    pub fn encode(&self) -> String {
        let order: Vec<Value> = self
            .order
            .iter()
            .map(|spec| Value::String(spec.token()))
            .collect();

        let mut wire = Map::with_capacity(2);
        wire.insert("values".to_string(), Value::Object(self.values.clone()));
        wire.insert("order".to_string(), Value::Array(order));

        STANDARD.encode(Value::Object(wire).to_string())
    }

    /// Decodes and validates an opaque cursor string
    ///
    /// # Errors
    ///
    /// * `MalformedCursor` - not base64, not UTF-8 JSON, not an object carrying
    ///   an object `values` and a non-empty string array `order`, or an order
    ///   column without a boundary value
    /// * `InvalidOrderDirection` / `InvalidOrderColumn` - an embedded order token is invalid
    pub fn decode(encoded: &str) -> Result<Self, PaginationError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| PaginationError::malformed(format!("invalid base64: {}", e)))?;

        let text = String::from_utf8(bytes)
            .map_err(|_| PaginationError::malformed("payload is not valid UTF-8"))?;

        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| PaginationError::malformed(format!("invalid JSON: {}", e)))?;

        let mut object = match payload {
            Value::Object(object) => object,
            _ => return Err(PaginationError::malformed("payload is not an object")),
        };

        let values = match object.remove("values") {
            Some(Value::Object(values)) => values,
            Some(_) => return Err(PaginationError::malformed("`values` is not an object")),
            None => return Err(PaginationError::malformed("missing `values`")),
        };

        let tokens = match object.remove("order") {
            Some(Value::Array(tokens)) => tokens,
            Some(_) => return Err(PaginationError::malformed("`order` is not an array")),
            None => return Err(PaginationError::malformed("missing `order`")),
        };

        if tokens.is_empty() {
            return Err(PaginationError::malformed("`order` is empty"));
        }

        let mut order = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let token = token
                .as_str()
                .ok_or_else(|| PaginationError::malformed("`order` entries must be strings"))?;
            let spec = OrderSpec::parse(token)?;
            if !values.contains_key(&spec.column) {
                return Err(PaginationError::malformed(format!(
                    "no boundary value for `{}`",
                    spec.column
                )));
            }
            order.push(spec);
        }

        Ok(Self { values, order })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(tokens: &[&str]) -> Vec<OrderSpec> {
        OrderSpec::parse_all(tokens).unwrap()
    }

    #[test]
    fn test_parse_order_token() {
        let spec = OrderSpec::parse("like_count_DESC").unwrap();
        assert_eq!(spec.column, "like_count");
        assert_eq!(spec.direction, OrderDirection::Desc);
        assert_eq!(spec.to_string(), "like_count_DESC");

        assert_eq!(OrderSpec::parse("id_ASC").unwrap().direction, OrderDirection::Asc);
    }

    #[test]
    fn test_direction_is_case_sensitive() {
        assert!(matches!(
            OrderSpec::parse("id_desc"),
            Err(PaginationError::InvalidOrderDirection { .. })
        ));
        assert!(matches!(
            OrderSpec::parse("id"),
            Err(PaginationError::InvalidOrderDirection { .. })
        ));
        assert!(matches!(
            OrderSpec::parse("id_UP"),
            Err(PaginationError::InvalidOrderDirection { .. })
        ));
    }

    #[test]
    fn test_column_must_be_identifier() {
        assert!(matches!(
            OrderSpec::parse("id; DROP TABLE movie_ASC"),
            Err(PaginationError::InvalidOrderColumn { .. })
        ));
        assert!(matches!(
            OrderSpec::parse("_DESC"),
            Err(PaginationError::InvalidOrderColumn { .. })
        ));
    }

    #[test]
    fn test_cursor_round_trip() {
        let row = json!({"id": 5, "likeCount": 10, "title": "ignored"});
        let cursor = Cursor::from_row(&row, &order(&["likeCount_DESC", "id_DESC"])).unwrap();

        let keys: Vec<&String> = cursor.values.keys().collect();
        assert_eq!(keys, vec!["likeCount", "id"]);

        let decoded = Cursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded, cursor);
    }

    #[test]
    fn test_from_row_missing_column() {
        let row = json!({"id": 5});
        assert!(matches!(
            Cursor::from_row(&row, &order(&["rating_DESC"])),
            Err(PaginationError::InvalidOrderColumn { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        let encode = |v: Value| STANDARD.encode(v.to_string());

        let cases = vec![
            "not base64!!".to_string(),
            STANDARD.encode([0xff, 0xfe]),
            STANDARD.encode("{not json"),
            encode(json!([1, 2])),
            encode(json!({"order": ["id_DESC"]})),
            encode(json!({"values": {"id": 1}})),
            encode(json!({"values": [1], "order": ["id_DESC"]})),
            encode(json!({"values": {"id": 1}, "order": []})),
            encode(json!({"values": {"id": 1}, "order": [1]})),
            encode(json!({"values": {"id": 1}, "order": ["likeCount_DESC"]})),
        ];

        for case in cases {
            assert!(
                matches!(Cursor::decode(&case), Err(PaginationError::MalformedCursor { .. })),
                "expected malformed cursor for {}",
                case
            );
        }
    }

    #[test]
    fn test_decode_rejects_bad_embedded_direction() {
        let encoded = STANDARD.encode(json!({"values": {"id": 1}, "order": ["id_down"]}).to_string());
        assert!(matches!(
            Cursor::decode(&encoded),
            Err(PaginationError::InvalidOrderDirection { .. })
        ));
    }
}
