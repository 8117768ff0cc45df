//! Round-robin tracker server - HTTP API over the tournament engine
//!
//! This crate provides the web backend:
//! - REST API for roster, results and leaderboard
//! - CORS for browser frontends
//! - Optional static file serving for a bundled frontend

mod error;
mod routes;
mod state;

use axum::{
    http::HeaderValue,
    routing::{delete, get, post, put},
    Router,
};
use roundrobin_core::EngineConfig;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

pub use error::ApiError;
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for any path the API does not handle
    pub static_dir: Option<String>,
    /// Allowed CORS origins; `*` allows any
    pub cors_origins: Vec<String>,
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: None,
            cors_origins: vec!["*".to_string()],
            engine: EngineConfig::default(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let router = Router::new()
        .route("/status", get(routes::status::status_handler))
        .route("/state", get(routes::state::get_state))
        // Roster
        .route("/add_player/{name}", post(routes::players::add_player))
        .route("/delete_player/{name}", delete(routes::players::delete_player))
        .route(
            "/rename_player/{old}/{new}",
            put(routes::players::rename_player),
        )
        // Matches
        .route("/matches", get(routes::matches::list_matches))
        .route("/record_winner/{winner}", post(routes::matches::record_winner))
        .route("/skip_match", post(routes::matches::skip_match))
        .with_state(state);

    let router = match &config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(cors_layer(&config.cors_origins))
}

/// Build the CORS layer for the configured origins
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = Arc::new(ServerState::new(config.engine.clone()));
    let router = create_router(&config, state);

    tracing::info!(
        "Round-robin server starting on http://{}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        "Engine: {} mode, winner policy '{}'",
        config.engine.strictness,
        config.engine.winner_policy
    );
    if let Some(dir) = &config.static_dir {
        tracing::info!("Static files served from: {}", dir);
    }

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
