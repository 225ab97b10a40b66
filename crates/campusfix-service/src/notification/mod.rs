//! Notification dispatch and recipient-facing CRUD.

pub mod dispatcher;
pub mod service;

pub use dispatcher::NotificationDispatcher;
pub use service::NotificationService;
