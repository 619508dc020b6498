//! Retro Board Backend
//!
//! A REST backend for scheduling retrospectives, collecting feedback items,
//! voting, and aggregate analytics. State is held in memory and seeded with
//! fixed sample data; a restart resets to the seed.

mod analytics;
mod api;
mod config;
mod errors;
mod models;
mod seed;
mod store;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::RetroStore;

/// Application state shared across all handlers.
///
/// The store is explicitly constructed by `main` and injected here; handlers
/// take the lock for the full operation, so every store operation runs to
/// completion before another can observe state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<RetroStore>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Retro Board Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Seed the in-memory store
    let store = RetroStore::seeded();
    tracing::info!(
        "Store seeded with {} retros across {} teams",
        store.retros().len(),
        store.teams().len()
    );

    // Create application state
    let state = AppState {
        store: Arc::new(RwLock::new(store)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Retros
        .route("/retros", get(api::list_retros))
        .route("/retros", post(api::create_retro))
        .route("/retros/{id}", get(api::get_retro))
        // Retro items
        .route("/retros/{id}/items", post(api::add_retro_item))
        .route("/retros/{id}/items/{item_id}", put(api::update_retro_item))
        .route(
            "/retros/{id}/items/{item_id}",
            delete(api::delete_retro_item),
        )
        .route(
            "/retros/{id}/items/{item_id}/vote",
            post(api::vote_retro_item),
        )
        // Teams
        .route("/teams", get(api::list_teams))
        .route("/teams/{id}", get(api::get_team))
        // Selection
        .route("/selection", get(api::get_selection))
        .route("/selection/retro", put(api::select_retro))
        .route("/selection/team", put(api::select_team))
        // Analytics
        .route("/analytics", get(api::get_analytics));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
