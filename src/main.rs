use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use translate_speak_server::{create_router, AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let config = Config::from_env().expect("Invalid configuration");
    let addr = config.addr().expect("Invalid address");

    tracing::info!("Translate/Speak Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Upstream: {}", config.openai_base_url);
    if config.api_key().is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /translate and /tts will fail");
    }
    if let Some(dir) = &config.static_dir {
        tracing::info!("Static directory: {}", dir.display());
    }

    // Create app state
    let state = Arc::new(AppState::new(config));

    // Create router
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
