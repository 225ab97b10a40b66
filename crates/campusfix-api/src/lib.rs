//! # campusfix-api
//!
//! HTTP API layer for CampusFix built on Axum.
//!
//! Provides the REST endpoints, bearer-token extraction, DTOs, and
//! error mapping for the lifecycle, assignment, scheduling, and
//! notification subsystems.

pub mod app;
pub mod auth;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
