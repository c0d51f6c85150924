//! Movie entity as exposed by the listing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::CursorRow;

/// Format MySQL accepts when comparing against DATETIME columns
const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Sortable fields by API name, with the column backing each
    pub const SORT_FIELDS: [(&'static str, &'static str); 6] = [
        ("id", "id"),
        ("title", "title"),
        ("likeCount", "like_count"),
        ("dislikeCount", "dislike_count"),
        ("createdAt", "created_at"),
        ("updatedAt", "updated_at"),
    ];

    pub fn is_sortable(field: &str) -> bool {
        Self::column_for(field).is_some()
    }

    /// Column backing an API field name
    pub fn column_for(field: &str) -> Option<&'static str> {
        Self::SORT_FIELDS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
    }
}

impl CursorRow for Movie {
    fn column_value(&self, field: &str) -> Option<Value> {
        let value = match field {
            "id" => Value::from(self.id),
            "title" => Value::from(self.title.clone()),
            "likeCount" => Value::from(self.like_count),
            "dislikeCount" => Value::from(self.dislike_count),
            "createdAt" => Value::from(self.created_at.format(SQL_DATETIME_FORMAT).to_string()),
            "updatedAt" => Value::from(self.updated_at.format(SQL_DATETIME_FORMAT).to_string()),
            _ => return None,
        };
        Some(value)
    }
}

/// Optional filters applied before pagination
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    /// Substring match on the title
    pub title: Option<String>,
}

impl MovieFilter {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// LIKE pattern for the title filter, ignoring blank input
    pub fn title_pattern(&self) -> Option<String> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| format!("%{}%", t))
    }
}
