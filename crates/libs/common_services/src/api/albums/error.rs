use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to fetch albums list (http {code}: {reason})")]
    Http { code: u16, reason: String },

    #[error("Failed to fetch albums list ({0})")]
    Transport(String),

    #[error("Failed to decode albums list: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ManifestError {
    /// Fetch failures are shown to the visitor as page content instead of an error status.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Transport(_))
    }
}

impl From<reqwest::Error> for ManifestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl IntoResponse for ManifestError {
    fn into_response(self) -> Response {
        error!("Album manifest could not be served: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
