//! Pagination configuration

use serde::{Deserialize, Serialize};

/// Bounds and defaults applied to list endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Page size used when the caller does not send `take`
    pub default_take: u32,

    /// Upper bound for `take`
    pub max_take: u32,

    /// Order used when neither the caller nor a cursor provides one
    pub default_order: Vec<String>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_take: 10,
            max_take: 100,
            default_order: vec![String::from("id_DESC")],
        }
    }
}

impl PaginationConfig {
    /// Clamp a requested page size into `1..=max_take`
    pub fn clamp_take(&self, take: Option<u32>) -> u32 {
        take.unwrap_or(self.default_take).clamp(1, self.max_take.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_take() {
        let config = PaginationConfig::default();
        assert_eq!(config.clamp_take(None), 10);
        assert_eq!(config.clamp_take(Some(0)), 1);
        assert_eq!(config.clamp_take(Some(25)), 25);
        assert_eq!(config.clamp_take(Some(1000)), 100);
    }
}
