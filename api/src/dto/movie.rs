use reel_core::domain::entities::movie::MovieFilter;
use reel_shared::types::CursorPageRequest;
use serde::Deserialize;

/// Query string of GET /api/v1/movies
///
/// `order` is a comma-separated list such as `likeCount_DESC,id_DESC`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListQuery {
    pub title: Option<String>,
    pub cursor: Option<String>,
    pub order: Option<String>,
    pub take: Option<u32>,
}

impl MovieListQuery {
    pub fn filter(&self) -> MovieFilter {
        MovieFilter {
            title: self.title.clone(),
        }
    }

    pub fn page_request(&self) -> CursorPageRequest {
        let mut request = CursorPageRequest {
            cursor: self.cursor.clone().filter(|c| !c.is_empty()),
            order: self
                .order
                .as_deref()
                .map(|order| {
                    order
                        .split(',')
                        .map(str::trim)
                        .filter(|token| !token.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            ..CursorPageRequest::default()
        };
        if let Some(take) = self.take {
            request.take = take;
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_list_is_split_and_trimmed() {
        let query = MovieListQuery {
            order: Some("likeCount_DESC, id_DESC,".to_string()),
            take: Some(5),
            ..Default::default()
        };

        let request = query.page_request();
        assert_eq!(request.order, vec!["likeCount_DESC", "id_DESC"]);
        assert_eq!(request.take, 5);
        assert!(request.cursor.is_none());
    }

    #[test]
    fn test_defaults() {
        let request = MovieListQuery::default().page_request();
        assert_eq!(request, CursorPageRequest::default());
        assert_eq!(MovieListQuery::default().filter(), MovieFilter::default());
    }
}
