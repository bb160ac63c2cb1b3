pub mod document;
pub mod markdown;

use crate::SharedState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for export endpoints (mounted at /api/export)
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/markdown", post(markdown::export_markdown))
        .route("/document", post(document::export_document))
}

#[derive(OpenApi)]
#[openapi(paths(markdown::export_markdown, document::export_document))]
pub struct ApiDoc;
