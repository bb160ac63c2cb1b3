use axum::{response::IntoResponse, Json};
use draftmill_core::{to_document_tree, StructuredPost};

#[utoipa::path(
    post,
    path = "/api/export/document",
    tag = "export",
    responses(
        (status = 200, description = "Document node tree for the word-processor renderer")
    )
)]
pub async fn export_document(Json(post): Json<StructuredPost>) -> impl IntoResponse {
    Json(to_document_tree(&post))
}
