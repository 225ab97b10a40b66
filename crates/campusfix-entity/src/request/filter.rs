//! Work-queue filtering contract for request list views.
//!
//! This is the contract that defines what work staff can see and claim,
//! so the bucket semantics are fixed here and reproduced verbatim by the
//! repository's WHERE clauses:
//!
//! - admin, available: `status = pending`
//! - admin, assigned: `assigned_to IS NOT NULL`
//! - staff, available: `status = pending AND assigned_to IS NULL`
//! - staff, assigned: `assigned_to = actor`

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::Role;

use super::model::MaintenanceRequest;
use super::status::RequestStatus;

/// Named work-queue buckets exposed by list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestBucket {
    /// Requests open for pickup.
    Available,
    /// Requests someone is responsible for.
    Assigned,
}

/// Filter parameters accepted by the request list operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestFilter {
    /// Restrict to a single lifecycle status.
    pub status: Option<RequestStatus>,
    /// Restrict to a role-dependent work-queue bucket.
    pub bucket: Option<RequestBucket>,
}

impl RequestBucket {
    /// Evaluate the bucket predicate for one request, as seen by the
    /// given actor. The same conditions back the repository's SQL.
    pub fn matches(&self, role: Role, actor: Uuid, request: &MaintenanceRequest) -> bool {
        match (self, role) {
            (Self::Available, Role::Admin) => request.status == RequestStatus::Pending,
            (Self::Assigned, Role::Admin) => request.assigned_to.is_some(),
            (Self::Available, _) => {
                request.status == RequestStatus::Pending && request.assigned_to.is_none()
            }
            (Self::Assigned, _) => request.assigned_to == Some(actor),
        }
    }
}
