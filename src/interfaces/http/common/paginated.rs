//! Paged list responses
//!
//! The body is the bare JSON array of items. Position in the result set
//! travels in the `X-Pagination` header.

use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::shared::{PaginatedList, PAGINATION_HEADER};

pub struct Paginated<T>(pub PaginatedList<T>);

impl<T> IntoResponse for Paginated<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let (items, meta) = self.0.into_parts();

        let header = match meta
            .to_header_value()
            .map_err(|e| e.to_string())
            .and_then(|v| HeaderValue::from_str(&v).map_err(|e| e.to_string()))
        {
            Ok(value) => value,
            Err(e) => {
                return ApiError::Internal(format!("cannot encode pagination header: {}", e))
                    .into_response()
            }
        };

        let mut response = Json(items).into_response();
        response
            .headers_mut()
            .insert(HeaderName::from_static(PAGINATION_HEADER), header);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::PaginationMetaData;

    #[tokio::test]
    async fn body_is_plain_array_and_header_carries_metadata() {
        let list = PaginatedList::new(vec!["a", "b"], 1, 2, 3).unwrap();
        let response = Paginated(list).into_response();

        let header = response
            .headers()
            .get("X-Pagination")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let meta = PaginationMetaData::from_header(&header).unwrap();
        assert_eq!(meta.total_pages, 2);
        assert!(meta.has_next);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"["a","b"]"#);
    }
}
