use crate::api_state::ApiContext;
use crate::routes::albums::handlers::{albums_handler, albums_redirect_handler, thumbnail_handler};
use crate::{ALBUMS_ROUTE, THUMBNAIL_ROUTE};
use axum::{Router, routing::get};

pub fn albums_public_router() -> Router<ApiContext> {
    Router::new()
        .route(ALBUMS_ROUTE, get(albums_handler))
        .route("/albums", get(albums_redirect_handler))
}

pub fn thumbnail_public_router() -> Router<ApiContext> {
    Router::new().route(THUMBNAIL_ROUTE, get(thumbnail_handler))
}
