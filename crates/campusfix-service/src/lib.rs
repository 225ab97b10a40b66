//! # campusfix-service
//!
//! The CampusFix core subsystems: request lifecycle control, assignment
//! and claiming, scheduling, and notification dispatch. Services
//! orchestrate repositories; the decision logic itself (transitions,
//! bucket filters, event rendering) is pure and unit-testable.

pub mod assignment;
pub mod context;
pub mod lifecycle;
pub mod notification;
pub mod schedule;

pub use context::RequestContext;
