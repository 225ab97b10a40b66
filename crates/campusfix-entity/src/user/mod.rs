//! Acting principal roles.

pub mod role;

pub use role::{Role, is_staff_like};
