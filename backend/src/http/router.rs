//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Admin gate
        .route("/login", post(handlers::login))
        // Dashboard
        .route("/dashboard", get(handlers::dashboard))
        // Schedule compilation and day navigation
        .route("/schedule/refresh", post(handlers::refresh_schedule))
        .route("/agenda/{date}", get(handlers::get_day_view))
        .route("/agenda/{date}/print", get(handlers::get_day_print))
        // Manual hearing mutations
        .route("/hearings", post(handlers::save_hearing))
        .route("/hearings/{id}", delete(handlers::delete_hearing));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
