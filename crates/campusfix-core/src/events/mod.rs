//! Domain events emitted by CampusFix operations.
//!
//! Lifecycle, assignment, and scheduling operations return the events
//! they produce instead of calling delivery inline; the notification
//! dispatcher consumes them after the primary state change has been
//! committed, so a delivery failure can never roll back a mutation.

pub mod request;
pub mod schedule;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use request::RequestEvent;
pub use schedule::ScheduleEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The user who caused the event (if applicable).
    pub actor_id: Option<Uuid>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A request lifecycle or assignment event.
    Request(RequestEvent),
    /// A scheduling event.
    Schedule(ScheduleEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor_id: Option<Uuid>, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor_id,
            payload,
        }
    }
}
