//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use campusfix_core::config::AppConfig;
use campusfix_service::assignment::AssignmentService;
use campusfix_service::lifecycle::LifecycleService;
use campusfix_service::notification::NotificationService;
use campusfix_service::schedule::ScheduleService;

use crate::auth::TokenVerifier;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db_pool: PgPool,
    /// Bearer token verifier.
    pub token_verifier: Arc<TokenVerifier>,
    /// Request lifecycle controller.
    pub lifecycle_service: Arc<LifecycleService>,
    /// Assignment and claim manager.
    pub assignment_service: Arc<AssignmentService>,
    /// Scheduling subsystem.
    pub schedule_service: Arc<ScheduleService>,
    /// Recipient-facing notification CRUD.
    pub notification_service: Arc<NotificationService>,
}
