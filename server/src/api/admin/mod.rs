pub mod list;
pub mod update;

use crate::SharedState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for template admin endpoints (mounted at
/// /api/admin/prompts)
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list::list_prompts).post(update::update_prompt))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_prompts, update::update_prompt),
    components(schemas(update::UpdatePromptRequest, update::UpdatePromptResponse))
)]
pub struct ApiDoc;
