//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use campusfix_entity::request::{NewRequest, RequestBucket, RequestStatus};

/// Create maintenance request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRequestBody {
    /// Requester display name.
    #[validate(length(min = 1, max = 255, message = "Requester name is required"))]
    pub requester_name: String,
    /// Self-reported role (student, staff, instructor, other).
    #[validate(length(min = 1, max = 100, message = "Requester role is required"))]
    pub requester_role: String,
    /// Class section, for students.
    pub section: Option<String>,
    /// Student ID number, for students.
    pub student_id: Option<String>,
    /// Description of the issue.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Building identifier.
    #[validate(length(min = 1, message = "Building is required"))]
    pub building: String,
    /// Floor identifier.
    pub floor: Option<String>,
    /// Room identifier.
    #[validate(length(min = 1, message = "Room is required"))]
    pub room: String,
    /// Media storage reference for the issue photo.
    pub issue_photo: Option<String>,
}

impl CreateRequestBody {
    /// Converts the body into the service-layer creation input.
    pub fn into_new_request(self) -> NewRequest {
        NewRequest {
            requester_name: self.requester_name,
            requester_role: self.requester_role,
            section: self.section,
            student_id: self.student_id,
            description: self.description,
            building: self.building,
            floor: self.floor,
            room: self.room,
            issue_photo: self.issue_photo,
        }
    }
}

/// Status update body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusBody {
    /// Target status name.
    pub status: String,
    /// Completion notes, consumed only when `status` is `completed`.
    pub completion_notes: Option<String>,
    /// Completion photo reference, consumed only when `status` is
    /// `completed`.
    pub completion_photo: Option<String>,
}

/// Completion body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteBody {
    /// Notes recorded at completion.
    pub completion_notes: Option<String>,
    /// Media storage reference for the completion photo.
    pub completion_photo: Option<String>,
}

/// Admin assignment body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignBody {
    /// Staff member to assign.
    pub staff_id: Uuid,
}

/// Schedule upsert body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetScheduleBody {
    /// Calendar date of the visit.
    pub schedule_date: NaiveDate,
    /// Free-form duration estimate.
    pub estimated_duration: Option<String>,
    /// Staff member attached to the visit.
    pub assigned_staff: Option<Uuid>,
}

/// Query parameters for the request list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRequestsQuery {
    /// Restrict to a lifecycle status.
    pub status: Option<RequestStatus>,
    /// Restrict to a work-queue bucket.
    pub bucket: Option<RequestBucket>,
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

/// Query parameters for the month calendar view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthQuery {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}
