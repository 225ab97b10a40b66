//! Request context carrying the authenticated caller's identity and role.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campusfix_entity::user::Role;

/// Context for the current authenticated request.
///
/// Extracted by the API layer from the bearer token and passed into
/// service methods so that every operation knows *who* is acting. The
/// core never issues or validates credentials itself; this is the
/// consumed shape of the external identity provider's answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's exact authorization role.
    pub role: Role,
    /// The username (convenience field from token claims).
    pub username: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: Role, username: String) -> Self {
        Self {
            user_id,
            role,
            username,
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns whether the current user may mutate request status.
    pub fn can_work_requests(&self) -> bool {
        self.role.can_work_requests()
    }
}
