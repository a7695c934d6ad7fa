use crate::api::thumbnail::error::ThumbnailError;
use crate::api::thumbnail::interfaces::ThumbnailImage;
use crate::api::thumbnail::service::thumbnail_url;
use app_state::{DropboxSettings, SecretSettings};
use http::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::debug;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Talks to the Dropbox content API on behalf of the browser, adding the bearer credential.
#[derive(Clone)]
pub struct DropboxClient {
    http_client: Client,
    base_url: String,
    size: String,
    access_token: String,
}

impl DropboxClient {
    #[must_use]
    pub fn new(http_client: Client, settings: &DropboxSettings, secrets: &SecretSettings) -> Self {
        Self {
            http_client,
            base_url: settings.thumbnail_base_url.clone(),
            size: settings.thumbnail_size.clone(),
            access_token: secrets.dropbox_access_token.clone(),
        }
    }

    /// Fetches the thumbnail for an already validated storage path.
    pub async fn fetch_thumbnail(&self, path: &str) -> Result<ThumbnailImage, ThumbnailError> {
        let url = thumbnail_url(&self.base_url, path, &self.size);
        debug!("fetching {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("thumbnail upstream returned {} for {}", status, url);
            return Err(ThumbnailError::Upstream(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_owned();
        let bytes = response.bytes().await?;

        Ok(ThumbnailImage {
            content_type,
            bytes,
        })
    }
}
