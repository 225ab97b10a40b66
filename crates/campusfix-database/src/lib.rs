//! # campusfix-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the three CampusFix collections: requests,
//! schedules, and notifications.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::create_pool;
