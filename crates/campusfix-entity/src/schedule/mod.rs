//! Schedule entity.

pub mod model;

pub use model::{Schedule, ScheduleEntry, validate_schedule_date};
