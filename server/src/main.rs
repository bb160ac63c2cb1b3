mod api;

use std::env;
use std::sync::Arc;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use utoipa_swagger_ui::SwaggerUi;

use draftmill_core::llm::{create_provider_from_env, LlmProvider};
use draftmill_core::PromptStore;

/// Application state shared across all handlers.
///
/// `provider` is `None` when no API credential is configured; the generation
/// endpoints then answer with the fixed placeholder post instead of calling
/// out.
pub struct AppState {
    pub store: PromptStore,
    pub provider: Option<Arc<dyn LlmProvider>>,
}

pub type SharedState = Arc<AppState>;

/// Console logging via EnvFilter; RUST_LOG controls verbosity.
fn init_telemetry() {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{spec}");
        return;
    }

    init_telemetry();

    let prompts_path =
        env::var("DRAFTMILL_PROMPTS_PATH").unwrap_or_else(|_| "data/prompts.json".to_string());
    let store = PromptStore::new(&prompts_path);

    let provider: Option<Arc<dyn LlmProvider>> = match create_provider_from_env() {
        Ok(p) => {
            tracing::info!(
                "completion provider ready: {} ({})",
                p.provider_name(),
                p.model_name()
            );
            Some(Arc::from(p))
        }
        Err(e) => {
            tracing::warn!(
                "completion provider not configured ({e}); generation endpoints will return the placeholder post"
            );
            None
        }
    };

    let state: SharedState = Arc::new(AppState { store, provider });

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .nest("/api/admin/prompts", api::admin::router())
        .nest("/api", api::generate::router())
        .nest("/api/export", api::export::router())
        .nest("/api/test", api::testing::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                ),
        );

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://localhost:3000/swagger-ui/");

    axum::serve(listener, app).await.unwrap();
}
