//! Maintenance request entity.

pub mod filter;
pub mod model;
pub mod status;

pub use filter::{RequestBucket, RequestFilter};
pub use model::{MaintenanceRequest, NewRequest};
pub use status::RequestStatus;
