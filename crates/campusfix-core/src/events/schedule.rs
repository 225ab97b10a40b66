//! Scheduling events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events produced by the scheduling subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScheduleEvent {
    /// A visit was scheduled (or rescheduled) for a request.
    Scheduled {
        /// The request ID.
        request_id: Uuid,
        /// The user who filed the request.
        requester_id: Uuid,
        /// The scheduled calendar date.
        schedule_date: NaiveDate,
        /// Staff member attached to the visit, if any.
        assigned_staff: Option<Uuid>,
    },
}
