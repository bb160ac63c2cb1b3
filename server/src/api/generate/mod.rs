pub mod direct;
pub mod with_files;

use crate::api::ErrorResponse;
use crate::{AppState, SharedState};
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use draftmill_core::{assemble, normalize, AssembleError, StructuredPost, Submission};
use utoipa::OpenApi;

/// Returns the router for generation endpoints (mounted at /api)
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/generate", post(direct::generate))
        .route(
            "/generate-with-files",
            post(with_files::generate_with_files)
                .layer(DefaultBodyLimit::max(with_files::MAX_UPLOAD_BYTES)),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(direct::generate, with_files::generate_with_files),
    components(schemas(direct::GenerateRequest, with_files::GenerateWithFilesRequest))
)]
pub struct ApiDoc;

/// Run the shared generation pipeline for an already-parsed submission.
///
/// Validation errors never reach the provider; a missing credential is
/// answered with the fixed placeholder post rather than an error.
pub(crate) async fn run_generation(state: &AppState, submission: Submission) -> Response {
    let category = submission.category.clone();

    let payload = match assemble(&submission, &state.store) {
        Ok(p) => p,
        Err(AssembleError::MissingField(field)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!(
                    "필수 입력 값이 누락되었습니다: {field}"
                ))),
            )
                .into_response()
        }
        Err(AssembleError::NoFilesProvided) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("첨부 파일이 없습니다")),
            )
                .into_response()
        }
        Err(AssembleError::NoSystemPrompt) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("시스템 프롬프트를 찾을 수 없습니다.")),
            )
                .into_response()
        }
        Err(AssembleError::Store(e)) => {
            tracing::error!("Failed to read prompt store: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("프롬프트 데이터를 읽지 못했습니다.")),
            )
                .into_response();
        }
    };

    let Some(provider) = &state.provider else {
        return Json(StructuredPost::missing_credential(&category)).into_response();
    };

    match provider.complete(&payload).await {
        Ok(raw) => Json(normalize(&raw, &category)).into_response(),
        Err(e) => {
            tracing::error!("블로그 생성 오류: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "블로그 포스트 생성 중 오류가 발생했습니다.",
                    e.to_string(),
                )),
            )
                .into_response()
        }
    }
}
