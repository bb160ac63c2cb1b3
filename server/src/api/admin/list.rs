use crate::api::ErrorResponse;
use crate::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/api/admin/prompts",
    tag = "admin",
    responses(
        (status = 200, description = "Full category -> template mapping"),
        (status = 500, description = "Template store unreadable", body = ErrorResponse)
    )
)]
pub async fn list_prompts(State(state): State<SharedState>) -> impl IntoResponse {
    match state.store.get_all() {
        Ok(all) => Json(all).into_response(),
        Err(e) => {
            tracing::error!("Failed to read prompt store: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("프롬프트 데이터를 읽지 못했습니다.")),
            )
                .into_response()
        }
    }
}
