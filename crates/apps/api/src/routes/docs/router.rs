use crate::api_state::ApiContext;
use crate::docs::handlers::{docs_page, openapi_json};
use axum::{Router, routing::get};

pub fn docs_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/docs", get(docs_page))
        .route("/openapi.json", get(openapi_json))
}
