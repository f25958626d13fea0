use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Client-visible request failures. Every variant maps to a 404.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("404 page not found")]
    NotFound,
    #[error("Cover not found")]
    CoverNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}
