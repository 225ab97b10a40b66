//! # campusfix-entity
//!
//! Entity models and closed enumerations for CampusFix: maintenance
//! requests, schedules, notifications, and acting roles.

pub mod notification;
pub mod request;
pub mod schedule;
pub mod user;
