//! Pure transition planning for the request state machine.
//!
//! A plan is computed before anything is written: it carries the
//! resulting status, the completion fields to store (if completing),
//! and the events to emit once the write has committed. Delivery
//! happens after the fact, so a notification failure can never roll
//! back a state change.

use campusfix_core::AppError;
use campusfix_core::events::RequestEvent;
use campusfix_entity::request::{MaintenanceRequest, RequestStatus};
use campusfix_entity::user::Role;

/// The outcome of planning a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    /// The status to write.
    pub status: RequestStatus,
    /// Completion notes to store; only ever set when completing.
    pub completion_notes: Option<String>,
    /// Completion photo reference to store; only ever set when completing.
    pub completion_photo: Option<String>,
    /// Events to emit after the write commits.
    pub events: Vec<RequestEvent>,
}

impl TransitionPlan {
    /// Whether this plan writes the completion fields.
    pub fn is_completion(&self) -> bool {
        self.status == RequestStatus::Completed
    }
}

/// Plan a status update requested by `actor_role`.
///
/// Only staff and admin may change status. A `completed` target
/// delegates to [`plan_completion`]. Notes and photo supplied alongside
/// a non-completed status are dropped: completion fields are written by
/// completion alone.
///
/// Re-issuing the current status is a data-level no-op that still bumps
/// `updated_at` and still notifies; `suppress_noop_notice` exists as a
/// product switch to silence the duplicate.
pub fn plan_status_update(
    request: &MaintenanceRequest,
    new_status: RequestStatus,
    notes: Option<String>,
    photo: Option<String>,
    actor_role: Role,
    suppress_noop_notice: bool,
) -> Result<TransitionPlan, AppError> {
    if !actor_role.can_work_requests() {
        return Err(AppError::authorization(
            "Only staff or admin may update request status",
        ));
    }

    if new_status == RequestStatus::Completed {
        return plan_completion(request, notes, photo, actor_role);
    }

    let mut events = Vec::new();
    let is_noop = request.status == new_status;
    if !(is_noop && suppress_noop_notice) {
        events.push(RequestEvent::StatusChanged {
            request_id: request.id,
            requester_id: request.requester_id,
            status: new_status.as_str().to_string(),
        });
    }

    Ok(TransitionPlan {
        status: new_status,
        completion_notes: None,
        completion_photo: None,
        events,
    })
}

/// Plan a completion.
pub fn plan_completion(
    request: &MaintenanceRequest,
    completion_notes: Option<String>,
    completion_photo: Option<String>,
    actor_role: Role,
) -> Result<TransitionPlan, AppError> {
    if !actor_role.can_work_requests() {
        return Err(AppError::authorization(
            "Only staff or admin may complete a request",
        ));
    }

    Ok(TransitionPlan {
        status: RequestStatus::Completed,
        completion_notes,
        completion_photo,
        events: vec![RequestEvent::Completed {
            request_id: request.id,
            requester_id: request.requester_id,
        }],
    })
}
