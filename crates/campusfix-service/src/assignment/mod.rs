//! Assignment and claim management.

pub mod service;

pub use service::AssignmentService;
