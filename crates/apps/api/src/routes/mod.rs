pub mod albums;
mod api_doc;
pub mod docs;
pub mod root;

use crate::albums::router::{albums_public_router, thumbnail_public_router};
use crate::api_state::ApiContext;
use crate::docs::router::docs_public_router;
use crate::root::router::root_public_router;
use axum::Router;

pub const ALBUMS_ROUTE: &str = "/albums/";
pub const THUMBNAIL_ROUTE: &str = "/albums/thumbnail";

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    let mut router = Router::new()
        .merge(root_public_router())
        .merge(docs_public_router())
        .merge(albums_public_router());

    if api_state.settings.albums.thumbnails_enabled {
        router = router.merge(thumbnail_public_router());
    }

    router.with_state(api_state)
}
