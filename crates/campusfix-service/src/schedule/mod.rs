//! Scheduling subsystem.

pub mod service;

pub use service::{ScheduleService, month_range};
