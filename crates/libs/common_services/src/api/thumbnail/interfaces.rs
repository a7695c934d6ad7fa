use axum::body::Bytes;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ThumbnailParams {
    /// Storage path of the image, must start with the configured prefix (e.g. `photos/2014/a.jpg`).
    pub path: Option<String>,
}

/// A thumbnail as returned by the storage API, buffered in full.
#[derive(Debug, Clone)]
pub struct ThumbnailImage {
    pub content_type: String,
    pub bytes: Bytes,
}
