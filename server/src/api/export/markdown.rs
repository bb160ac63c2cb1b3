use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use draftmill_core::{markdown_filename, to_plain_text, StructuredPost};

#[utoipa::path(
    post,
    path = "/api/export/markdown",
    tag = "export",
    responses(
        (status = 200, description = "Markdown file (.md)", content_type = "text/markdown")
    )
)]
pub async fn export_markdown(Json(post): Json<StructuredPost>) -> impl IntoResponse {
    let text = to_plain_text(&post);
    let filename = markdown_filename(&post.title);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/markdown; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(text))
        .unwrap()
        .into_response()
}
