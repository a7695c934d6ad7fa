use crate::docs::scalar_config::get_custom_html;
use crate::routes::api_doc::ApiDoc;
use axum::Json;
use axum::http::StatusCode;
use axum::response::Html;
use tracing::error;
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;

pub async fn openapi_json() -> Json<OpenApiSpec> {
    Json(ApiDoc::openapi())
}

pub async fn docs_page() -> Result<Html<String>, StatusCode> {
    get_custom_html(&ApiDoc::openapi())
        .map(Html)
        .map_err(|e| {
            error!("Failed to render API docs: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
