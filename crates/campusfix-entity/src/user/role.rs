//! Acting role enumeration and the separate display-grouping heuristic.
//!
//! Two deliberately distinct code paths:
//!
//! - [`Role`] is the authorization input: exact, closed enum membership.
//!   Every mutation gate in the service layer checks this and nothing
//!   else.
//! - [`is_staff_like`] is a display-grouping heuristic for navigation
//!   (the identity provider hands out decorated role strings like
//!   "Maintenance Staff"). It must never feed an authorization decision;
//!   merging the two would silently broaden access.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use campusfix_core::AppError;

/// Roles recognized by the core authorization checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Oversees all work: assigns requests, edits any status.
    Admin,
    /// Maintenance staff: claims, works, and resolves requests.
    Staff,
    /// End user: files requests and watches their progress.
    User,
}

impl Role {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role may mutate request status (staff or admin).
    pub fn can_work_requests(&self) -> bool {
        matches!(self, Self::Admin | Self::Staff)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "user" => Ok(Self::User),
            _ => Err(AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, staff, user"
            ))),
        }
    }
}

/// Display-grouping heuristic: does a raw role string belong in the
/// staff section of the navigation?
///
/// Normalizes (trim, lowercase) and then matches on the substring
/// "staff", so decorated values like "Maintenance Staff" group with
/// staff. Navigation only; authorization uses [`Role`] exactly.
pub fn is_staff_like(raw: &str) -> bool {
    raw.trim().to_lowercase().contains("staff")
}
