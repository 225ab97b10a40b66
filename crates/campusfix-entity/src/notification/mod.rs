//! Notification entity.

pub mod category;
pub mod model;

pub use category::NotificationKind;
pub use model::Notification;
