//! Request lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use campusfix_core::AppError;

/// Lifecycle states of a maintenance request.
///
/// `Pending` is the initial state and the only one reachable from
/// creation. There is no enforced terminal state: a completed request
/// may be edited back into another status by staff or admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Filed but not yet worked on; the only state in which the request
    /// may be unassigned.
    Pending,
    /// A staff member is actively working on the issue.
    InProgress,
    /// Work is paused (waiting on parts, access, approval).
    OnHold,
    /// Resolved; completion notes and photo may be attached.
    Completed,
}

impl RequestStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
        }
    }

    /// Check whether completion fields may be written in this status.
    pub fn allows_completion_fields(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "on_hold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            _ => Err(AppError::invalid_status(format!(
                "Invalid request status: '{s}'. Expected one of: pending, in_progress, on_hold, completed"
            ))),
        }
    }
}
