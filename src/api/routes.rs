use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::config::Config;
use crate::error::AppError;
use crate::openai::OpenAiClient;

/// Largest request body the proxies will read.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub struct AppState {
    pub config: Config,
    pub openai: OpenAiClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let openai = OpenAiClient::new(config.openai_base_url.clone());
        Self { config, openai }
    }

    pub(crate) fn api_key(&self) -> Result<&str, AppError> {
        self.config
            .api_key()
            .ok_or_else(|| AppError::Misconfigured("OpenAI API key not configured".into()))
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // Any OPTIONS request is answered here as a preflight, before routing.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .route(
            "/translate",
            post(handlers::translate).fallback(handlers::method_not_allowed),
        )
        .route(
            "/tts",
            post(handlers::tts).fallback(handlers::method_not_allowed),
        )
        .route("/voices", get(handlers::list_voices))
        .route("/languages", get(handlers::list_languages))
        .route("/health", get(handlers::health));

    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).append_index_html_on_directories(true),
        ),
        None => router,
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
