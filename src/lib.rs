pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod models;
pub mod middleware;
pub mod routes;
pub mod generation;
pub mod newsletter;
pub mod rate_limit;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{MemStorage, Storage};
use crate::generation::gemini::GeminiClient;
use crate::generation::TextGenerator;
use crate::state::{AppState, SharedState};

/// Assemble process-wide state: the store (seeded if configured) and the
/// text generator when credentials are present.
pub fn build_state(config: Config) -> Result<SharedState, String> {
    let store = MemStorage::new();
    if config.seed {
        db::seed::seed(&store);
    }

    let generator: Option<Arc<dyn TextGenerator>> = match config.gemini.as_ref() {
        Some(gemini) => {
            tracing::info!("Text generation configured (model {})", gemini.model);
            Some(Arc::new(GeminiClient::new(gemini)?))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set; refinement echoes input and newsletters are unavailable");
            None
        }
    };

    let store: Arc<dyn Storage> = Arc::new(store);
    Ok(Arc::new(AppState::new(config, store, generator)))
}

pub fn build_app(state: SharedState) -> Router {
    let cors = (!state.config.cors_origins.is_empty()).then(|| {
        let origins: Vec<HeaderValue> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{origin}'");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    });

    let router = Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http());

    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
