//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Request bodies are two 24-value series at most; anything larger is a mistake.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Window selection
        .route("/optimal-schedule", post(handlers::optimal_schedule))
        .route("/optimal-schedule/candidates", post(handlers::rank_candidates))
        .route("/optimal-schedule/sample", get(handlers::sample_request))
        // Patch catalog
        .route("/patches", get(handlers::list_patches).post(handlers::create_patch))
        .route("/patches/{id}", get(handlers::get_patch))
        .route("/patches/{id}/score", get(handlers::score_patch))
        // Roster and load profile
        .route("/crew", get(handlers::list_crew))
        .route("/network-load", get(handlers::list_network_loads))
        .route("/best-hours", get(handlers::best_hours))
        .route("/stats", get(handlers::get_stats))
        .route("/forecast/{day}", get(handlers::get_forecast))
        // Plans
        .route("/plans", post(handlers::create_plan))
        .route("/plans/{plan_id}", get(handlers::get_plan));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
