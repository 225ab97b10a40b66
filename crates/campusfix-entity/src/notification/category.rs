//! Keyword classification of notification messages.
//!
//! Messages carry no explicit type tag; clients pick an icon by keyword.
//! The classifier is ordered: "scheduled" wins over "assigned" wins over
//! "status".

use serde::{Deserialize, Serialize};

/// Display category of a notification, derived from its message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A visit was scheduled (calendar icon).
    Scheduled,
    /// Work was assigned to someone (alert icon).
    Assigned,
    /// A request's status changed (clock icon).
    StatusChange,
    /// Anything else (bell icon).
    General,
}

impl NotificationKind {
    /// Classify a message by keyword.
    pub fn classify(message: &str) -> Self {
        if message.contains("scheduled") {
            Self::Scheduled
        } else if message.contains("assigned") {
            Self::Assigned
        } else if message.contains("status") {
            Self::StatusChange
        } else {
            Self::General
        }
    }
}
