//! Maintenance request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::RequestStatus;

/// A reported maintenance issue and its tracked resolution state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRequest {
    /// Unique request identifier, immutable once created.
    pub id: Uuid,
    /// The authenticated user who filed the request; notification
    /// recipient for lifecycle events.
    pub requester_id: Uuid,
    /// Display name of the requester as entered on the form.
    pub requester_name: String,
    /// Self-reported role of the requester (student, staff, instructor,
    /// other). Free-form display text, not the authorization role.
    pub requester_role: String,
    /// Class section, for student requesters.
    pub section: Option<String>,
    /// Student ID number, for student requesters.
    pub student_id: Option<String>,
    /// Description of the issue.
    pub description: String,
    /// Building identifier (opaque reference into the location catalog).
    pub building: String,
    /// Floor identifier, if given.
    pub floor: Option<String>,
    /// Room identifier.
    pub room: String,
    /// Media storage reference for the issue photo, if uploaded.
    pub issue_photo: Option<String>,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// Staff member responsible for the work, if any. May be null only
    /// while the request is pending.
    pub assigned_to: Option<Uuid>,
    /// Notes recorded at completion.
    pub completion_notes: Option<String>,
    /// Media storage reference for the completion photo.
    pub completion_photo: Option<String>,
    /// When the request was filed.
    pub created_at: DateTime<Utc>,
    /// When the request was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl MaintenanceRequest {
    /// Check whether the request is unassigned.
    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.is_none()
    }

    /// Check whether the given user is the current assignee.
    pub fn is_assignee(&self, user_id: Uuid) -> bool {
        self.assigned_to == Some(user_id)
    }
}

/// Fields supplied by the requester when filing a new request.
///
/// `status` and `assigned_to` are never caller-supplied: creation
/// forces `pending` and unassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRequest {
    /// Display name of the requester.
    pub requester_name: String,
    /// Self-reported role (student, staff, instructor, other).
    pub requester_role: String,
    /// Class section, for student requesters.
    pub section: Option<String>,
    /// Student ID number, for student requesters.
    pub student_id: Option<String>,
    /// Description of the issue.
    pub description: String,
    /// Building identifier.
    pub building: String,
    /// Floor identifier, if given.
    pub floor: Option<String>,
    /// Room identifier.
    pub room: String,
    /// Media storage reference for the issue photo, if uploaded.
    pub issue_photo: Option<String>,
}
