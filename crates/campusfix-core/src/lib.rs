//! # campusfix-core
//!
//! Core crate for CampusFix. Contains configuration schemas, domain
//! events, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CampusFix crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
