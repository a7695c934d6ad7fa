use crate::{ALBUMS_ROUTE, THUMBNAIL_ROUTE};
use app_state::{AlbumSettings, DropboxSettings};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect};
use common_services::api::albums::error::ManifestError;
use common_services::api::albums::render::{render_albums_page, render_error_fragment};
use common_services::api::albums::service::{build_albums_page, fetch_manifest};
use common_services::api::thumbnail::error::ThumbnailError;
use common_services::api::thumbnail::interfaces::ThumbnailParams;
use common_services::api::thumbnail::service::validate_thumbnail_path;
use common_services::dropbox_client::DropboxClient;
use reqwest::Client;
use tracing::{instrument, warn};

/// List all photo albums.
///
/// Fetches the album manifest and renders it as an HTML page. When the manifest can't be
/// fetched, an inline error fragment is rendered instead, still with status 200.
#[utoipa::path(
    get,
    path = "/albums/",
    tag = "Albums",
    responses(
        (status = 200, description = "The album page, or an error fragment if the manifest could not be fetched.", body = String, content_type = "text/html"),
        (status = 500, description = "The manifest was fetched but could not be decoded."),
    )
)]
#[instrument(skip(http_client, albums), err(Debug))]
pub async fn albums_handler(
    State(http_client): State<Client>,
    State(albums): State<AlbumSettings>,
) -> Result<Html<String>, ManifestError> {
    let thumbnail_route = albums.thumbnails_enabled.then_some(THUMBNAIL_ROUTE);

    match fetch_manifest(&http_client, &albums.manifest_url).await {
        Ok(manifest) => {
            let page = build_albums_page(manifest, thumbnail_route);
            Ok(Html(render_albums_page(&page)))
        }
        Err(err) if err.is_recoverable() => {
            warn!("Showing album fetch error to visitor: {}", err);
            Ok(Html(render_error_fragment(&err.to_string())))
        }
        Err(err) => Err(err),
    }
}

/// Normalizes `/albums` to `/albums/` with a 308 rather than a 301, so the method is kept.
pub async fn albums_redirect_handler() -> Redirect {
    Redirect::permanent(ALBUMS_ROUTE)
}

/// Get an album thumbnail.
///
/// Proxies a thumbnail from Dropbox, adding the access token server side. Only paths inside
/// the configured prefix are served.
#[utoipa::path(
    get,
    path = "/albums/thumbnail",
    tag = "Albums",
    params(
        ThumbnailParams
    ),
    responses(
        (status = 200, description = "The thumbnail bytes, with the upstream content type.", body = Vec<u8>, content_type = "image/jpeg"),
        (status = 400, description = "No path was provided."),
        (status = 403, description = "The path is outside the allowed prefix."),
        (status = 500, description = "The storage API could not be reached."),
    )
)]
pub async fn thumbnail_handler(
    State(dropbox_client): State<DropboxClient>,
    State(dropbox): State<DropboxSettings>,
    Query(params): Query<ThumbnailParams>,
) -> Result<impl IntoResponse, ThumbnailError> {
    let path = validate_thumbnail_path(params.path.as_deref(), &dropbox.allowed_path_prefix)?;
    let image = dropbox_client.fetch_thumbnail(path).await?;

    Ok(([(header::CONTENT_TYPE, image.content_type)], image.bytes))
}
