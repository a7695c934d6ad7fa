use crate::routes::{albums, root};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        albums::handlers::albums_handler,
        albums::handlers::thumbnail_handler,
    ),
    tags(
        (name = "Albums", description = "Album listing and thumbnail proxy"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;
