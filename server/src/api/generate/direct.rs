use crate::api::ErrorResponse;
use crate::SharedState;
use axum::response::Response;
use axum::{extract::State, Json};
use draftmill_core::{Submission, SubmissionBody};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub content_purpose: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub persona: String,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub writing_tone: Option<String>,
    #[serde(default)]
    pub writing_style: Option<String>,
    #[serde(default)]
    pub product_details: Option<String>,
    #[serde(default)]
    pub review_info: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Structured blog post"),
        (status = 400, description = "Missing required field", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<SharedState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let submission = Submission {
        category: request.content_purpose,
        purpose: request.purpose,
        persona: request.persona,
        audience: request.target_audience,
        tone: request.writing_tone,
        style: request.writing_style,
        product_details: request.product_details,
        review_info: request.review_info,
        seo_keywords: None,
        body: SubmissionBody::Inline(request.content),
    };

    super::run_generation(&state, submission).await
}
