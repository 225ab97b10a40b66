//! Concrete repository implementations.

pub mod notification;
pub mod request;
pub mod schedule;
