use axum::response::Redirect;

use crate::ALBUMS_ROUTE;

/// The album listing is the only page, send visitors there.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 303, description = "Redirect to the album listing")
    )
)]
pub async fn root() -> Redirect {
    Redirect::to(ALBUMS_ROUTE)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "API is up and ready to accept traffic", body = String),
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
