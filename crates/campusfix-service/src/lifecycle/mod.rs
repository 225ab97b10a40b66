//! Request lifecycle controller.

pub mod service;
pub mod transition;

pub use service::LifecycleService;
pub use transition::{TransitionPlan, plan_completion, plan_status_update};
