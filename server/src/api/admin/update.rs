use crate::api::ErrorResponse;
use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use draftmill_core::StoreError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePromptRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub system: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdatePromptResponse {
    pub success: bool,
    pub key: String,
}

#[utoipa::path(
    post,
    path = "/api/admin/prompts",
    tag = "admin",
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Template updated", body = UpdatePromptResponse),
        (status = 400, description = "Missing key or system", body = ErrorResponse),
        (status = 403, description = "Unknown key; new templates cannot be created", body = ErrorResponse),
        (status = 500, description = "Template store failure", body = ErrorResponse)
    )
)]
pub async fn update_prompt(
    State(state): State<SharedState>,
    Json(request): Json<UpdatePromptRequest>,
) -> impl IntoResponse {
    if request.key.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("key가 필요합니다")),
        )
            .into_response();
    }
    if request.system.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("system이 필요합니다")),
        )
            .into_response();
    }

    match state.store.set(&request.key, &request.system) {
        Ok(()) => Json(UpdatePromptResponse {
            success: true,
            key: request.key,
        })
        .into_response(),
        Err(StoreError::UnknownKey(key)) => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new(format!(
                "새 프롬프트는 만들 수 없습니다. 기존 프롬프트만 수정할 수 있습니다: {key}"
            ))),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to save prompt: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("프롬프트를 저장하지 못했습니다.")),
            )
                .into_response()
        }
    }
}
