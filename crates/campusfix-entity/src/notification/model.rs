//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::category::NotificationKind;

/// A pull-delivered message informing a recipient of a lifecycle,
/// assignment, or schedule event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub recipient: Uuid,
    /// Human-readable message; classified by keyword for iconography.
    pub message: String,
    /// The request this notification refers to, if any. Soft reference:
    /// nulled if the request is ever deleted.
    pub request_id: Option<Uuid>,
    /// Whether the recipient has read this notification. Once true it
    /// is never reset by the system.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }

    /// Classify the message for display iconography.
    pub fn kind(&self) -> NotificationKind {
        NotificationKind::classify(&self.message)
    }
}
