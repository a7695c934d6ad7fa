use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Thumbnail failures are reported by status code only, with an empty body.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("No thumbnail path provided.")]
    MissingPath,

    #[error("Thumbnail path is outside the allowed scope: {0}")]
    ForbiddenPath(String),

    #[error("Thumbnail upstream returned {0}")]
    Upstream(StatusCode),

    #[error("Thumbnail request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ThumbnailError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPath => StatusCode::BAD_REQUEST,
            Self::ForbiddenPath(_) => StatusCode::FORBIDDEN,
            Self::Upstream(status) => *status,
            Self::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ThumbnailError {
    fn into_response(self) -> Response {
        if let Self::Request(err) = &self {
            error!("Thumbnail fetch failed: {}", err);
        }
        self.status_code().into_response()
    }
}
