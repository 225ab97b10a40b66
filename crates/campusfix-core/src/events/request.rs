//! Request lifecycle and assignment events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events produced by lifecycle and assignment operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestEvent {
    /// The request's status was changed (including re-issuing the
    /// current status, which still notifies).
    StatusChanged {
        /// The request ID.
        request_id: Uuid,
        /// The user who filed the request.
        requester_id: Uuid,
        /// The new status (lowercase wire form).
        status: String,
    },
    /// The request was marked completed.
    Completed {
        /// The request ID.
        request_id: Uuid,
        /// The user who filed the request.
        requester_id: Uuid,
    },
    /// A staff member was assigned (by admin) or claimed the request.
    Assigned {
        /// The request ID.
        request_id: Uuid,
        /// The staff member now responsible.
        staff_id: Uuid,
    },
    /// The assignee released the request back to the pending pool.
    AssignmentCancelled {
        /// The request ID.
        request_id: Uuid,
    },
}
