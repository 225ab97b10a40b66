//! Application builder — wires repositories, services, and state into
//! an Axum app.

use std::sync::Arc;

use sqlx::PgPool;

use campusfix_core::config::AppConfig;
use campusfix_core::error::AppError;
use campusfix_database::repositories::notification::NotificationRepository;
use campusfix_database::repositories::request::RequestRepository;
use campusfix_database::repositories::schedule::ScheduleRepository;
use campusfix_service::assignment::AssignmentService;
use campusfix_service::lifecycle::LifecycleService;
use campusfix_service::notification::{NotificationDispatcher, NotificationService};
use campusfix_service::schedule::ScheduleService;

use crate::auth::TokenVerifier;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let request_repo = Arc::new(RequestRepository::new(db_pool.clone()));
    let schedule_repo = Arc::new(ScheduleRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

    let dispatcher = Arc::new(NotificationDispatcher::new(Arc::clone(&notification_repo)));

    let lifecycle_service = Arc::new(LifecycleService::new(
        Arc::clone(&request_repo),
        Arc::clone(&dispatcher),
    ));
    let assignment_service = Arc::new(AssignmentService::new(
        Arc::clone(&request_repo),
        Arc::clone(&dispatcher),
    ));
    let schedule_service = Arc::new(ScheduleService::new(
        Arc::clone(&schedule_repo),
        Arc::clone(&request_repo),
        Arc::clone(&dispatcher),
    ));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));

    let token_verifier = Arc::new(TokenVerifier::new(&config.auth));

    AppState {
        config: Arc::new(config),
        db_pool,
        token_verifier,
        lifecycle_service,
        assignment_service,
        schedule_service,
        notification_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(config: AppConfig, db_pool: PgPool) -> axum::Router {
    build_router(build_state(config, db_pool))
}

/// Runs the CampusFix server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(config, db_pool);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CampusFix server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
    }
}
