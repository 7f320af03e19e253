//! # Web API
//!
//! HTTP surface for the decision engine: session lifecycle endpoints plus
//! a liveness check, with the standard middleware stack applied.

pub mod errors;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use errors::{ApiError, ApiResult};
pub use state::AppState;

/// Build the API router with the middleware stack applied
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health::basic_health))
        .route("/v1/sessions", post(handlers::sessions::create_session))
        .route("/v1/sessions/:id", get(handlers::sessions::get_session))
        .route(
            "/v1/sessions/:id/decisions",
            post(handlers::sessions::submit_decision),
        )
        .route(
            "/v1/sessions/:id/reset",
            post(handlers::sessions::reset_session),
        );

    apply_middleware_stack(router).with_state(state)
}

/// Apply the middleware stack for the API router
///
/// Applied in order: request tracing, CORS handling, request timeout.
/// Authentication belongs to the surrounding deployment, not this core.
fn apply_middleware_stack(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Create CORS layer with appropriate settings
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
