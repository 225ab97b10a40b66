//! Schedule entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use campusfix_core::AppError;

use crate::request::RequestStatus;

/// Calendar metadata attached to a request.
///
/// Exactly one schedule exists per request at a time; re-scheduling
/// overwrites (latest write wins, no history). Scheduling is advisory:
/// it never gates or alters the request lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Schedule {
    /// Unique schedule identifier.
    pub id: Uuid,
    /// The request this visit is for.
    pub request_id: Uuid,
    /// Calendar date of the scheduled visit.
    pub schedule_date: NaiveDate,
    /// Free-form duration estimate ("2 hours", "half a day").
    pub estimated_duration: Option<String>,
    /// Staff member attached to the visit, if any.
    pub assigned_staff: Option<Uuid>,
    /// When the schedule was (last) written.
    pub created_at: DateTime<Utc>,
}

/// A schedule joined with its request's summary fields, as returned by
/// the month calendar view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduleEntry {
    /// Unique schedule identifier.
    pub id: Uuid,
    /// The request this visit is for.
    pub request_id: Uuid,
    /// Calendar date of the scheduled visit.
    pub schedule_date: NaiveDate,
    /// Free-form duration estimate.
    pub estimated_duration: Option<String>,
    /// Staff member attached to the visit, if any.
    pub assigned_staff: Option<Uuid>,
    /// When the schedule was (last) written.
    pub created_at: DateTime<Utc>,
    /// Owning request: issue description.
    pub description: String,
    /// Owning request: building.
    pub building: String,
    /// Owning request: room.
    pub room: String,
    /// Owning request: current lifecycle status.
    pub status: RequestStatus,
}

/// Validate a schedule date against the date of writing.
///
/// Retroactive scheduling is rejected; `today` itself is allowed.
pub fn validate_schedule_date(schedule_date: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
    if schedule_date < today {
        return Err(AppError::validation(format!(
            "schedule_date {schedule_date} is in the past (today is {today})"
        )));
    }
    Ok(())
}
