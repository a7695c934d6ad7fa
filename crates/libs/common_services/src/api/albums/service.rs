use crate::api::albums::error::ManifestError;
use crate::api::albums::interfaces::{
    Album, AlbumIcon, AlbumManifest, AlbumView, AlbumsPage, DROPBOX_ICON, GOOGLE_PLUS_ICON,
};
use crate::utils::escape_path;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use tracing::{debug, warn};
use url::Url;

/// Fetches and parses the album manifest. Nothing is cached, every call hits the remote.
///
/// # Errors
///
/// Returns `ManifestError::Http` for a non-2xx response, `ManifestError::Transport` when the
/// request or body read fails, and `ManifestError::Decode` when the body isn't a manifest.
pub async fn fetch_manifest(
    http_client: &Client,
    manifest_url: &Url,
) -> Result<AlbumManifest, ManifestError> {
    debug!("fetching album manifest {}", manifest_url);
    let response = http_client.get(manifest_url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("Album manifest fetch returned {}", status);
        return Err(ManifestError::Http {
            code: status.as_u16(),
            reason: reason_phrase(&response),
        });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// The reason text the server sent. hyper only records it when it differs from the canonical
/// phrase, so the canonical one is the fallback.
fn reason_phrase(response: &Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| "Unknown".to_owned())
}

/// Computes the derived view fields for every album, keeping manifest order.
///
/// `thumbnail_route` is the path of the thumbnail proxy, or `None` when the proxy is disabled;
/// covers are only linked when it is set.
#[must_use]
pub fn build_albums_page(manifest: AlbumManifest, thumbnail_route: Option<&str>) -> AlbumsPage {
    AlbumsPage {
        title: manifest.title,
        albums: manifest
            .albums
            .into_iter()
            .map(|album| album_view(album, thumbnail_route))
            .collect(),
    }
}

fn album_view(album: Album, thumbnail_route: Option<&str>) -> AlbumView {
    let cover_url = match (thumbnail_route, &album.cover_path) {
        (Some(route), Some(cover_path)) => Some(cover_url(route, cover_path)),
        _ => None,
    };
    let icon = album_icon(&album.url);

    AlbumView {
        url: album.url,
        name: album.name,
        description: album.description,
        cover_url,
        icon,
    }
}

#[must_use]
pub fn cover_url(thumbnail_route: &str, cover_path: &str) -> String {
    format!("{thumbnail_route}?path={}", escape_path(cover_path))
}

/// Picks provider branding by substring match on the album link.
#[must_use]
pub fn album_icon(url: &str) -> Option<AlbumIcon> {
    if url.contains("dropbox.com") {
        Some(DROPBOX_ICON)
    } else if url.contains("plus.google.com") {
        Some(GOOGLE_PLUS_ICON)
    } else {
        None
    }
}
