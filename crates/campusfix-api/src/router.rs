//! Route definitions for the CampusFix HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::http::{HeaderValue, Method};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use campusfix_core::config::server::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes as usize;

    let api_routes = Router::new()
        .merge(request_routes())
        .merge(schedule_routes())
        .merge(notification_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Request lifecycle and assignment endpoints
fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/requests", post(handlers::request::create_request))
        .route("/requests", get(handlers::request::list_requests))
        .route("/requests/{id}", get(handlers::request::get_request))
        .route(
            "/requests/{id}/status",
            put(handlers::request::update_status),
        )
        .route(
            "/requests/{id}/complete",
            put(handlers::request::complete_request),
        )
        .route(
            "/requests/{id}/assign",
            put(handlers::request::assign_request),
        )
        .route("/requests/{id}/claim", post(handlers::request::claim_request))
        .route(
            "/requests/{id}/assignment",
            delete(handlers::request::cancel_assignment),
        )
}

/// Calendar scheduling endpoints
fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/requests/{id}/schedule",
            put(handlers::schedule::set_schedule),
        )
        .route("/schedules", get(handlers::schedule::month_schedules))
}

/// Recipient-facing notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::delete_notification),
        )
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Builds a CORS tower layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    layer
}
