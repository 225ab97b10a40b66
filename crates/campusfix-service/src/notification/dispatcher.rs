//! Renders domain events into notification rows.
//!
//! Dispatch is strictly best-effort and runs after the primary state
//! change has committed: a failed insert is logged at `warn` and never
//! surfaced to the caller. The authoritative state is the request row;
//! delivery is advisory.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use campusfix_core::events::{DomainEvent, EventPayload, RequestEvent, ScheduleEvent};
use campusfix_database::repositories::notification::NotificationRepository;

/// A rendered notification ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotice {
    /// Who receives the message.
    pub recipient: Uuid,
    /// The message text. Clients classify it by keyword for icons, so
    /// the wording here is part of the contract.
    pub message: String,
    /// The request the message refers to.
    pub request_id: Option<Uuid>,
}

/// Consumes domain events and appends notification rows.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationDispatcher {
    /// Creates a new dispatcher.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Render and store notifications for the given events.
    /// Fire-and-forget: errors are logged, never returned.
    pub async fn dispatch(&self, events: &[DomainEvent]) {
        for event in events {
            let notices = render(event);
            if notices.is_empty() {
                debug!(event_id = %event.id, "Event renders to no recipient, dropped");
                continue;
            }
            for notice in notices {
                if let Err(e) = self
                    .notif_repo
                    .create(notice.recipient, &notice.message, notice.request_id)
                    .await
                {
                    warn!(
                        event_id = %event.id,
                        recipient = %notice.recipient,
                        error = %e,
                        "Failed to deliver notification"
                    );
                }
            }
        }
    }
}

/// Render one event into zero or more notices.
pub fn render(event: &DomainEvent) -> Vec<RenderedNotice> {
    match &event.payload {
        EventPayload::Request(req_event) => match req_event {
            RequestEvent::StatusChanged {
                request_id,
                requester_id,
                status,
            } => vec![RenderedNotice {
                recipient: *requester_id,
                message: format!("Your maintenance request status changed to {status}."),
                request_id: Some(*request_id),
            }],
            RequestEvent::Completed {
                request_id,
                requester_id,
            } => vec![RenderedNotice {
                recipient: *requester_id,
                message: "Your maintenance request has been completed.".to_string(),
                request_id: Some(*request_id),
            }],
            RequestEvent::Assigned {
                request_id,
                staff_id,
            } => vec![RenderedNotice {
                recipient: *staff_id,
                message: "You have been assigned a maintenance request.".to_string(),
                request_id: Some(*request_id),
            }],
            // No admin-observer recipient model exists; the event is
            // rendered to nothing and dropped (fire-and-forget).
            RequestEvent::AssignmentCancelled { .. } => Vec::new(),
        },
        EventPayload::Schedule(ScheduleEvent::Scheduled {
            request_id,
            requester_id,
            schedule_date,
            assigned_staff,
        }) => {
            let mut notices = vec![RenderedNotice {
                recipient: *requester_id,
                message: format!(
                    "Your maintenance request has been scheduled for {schedule_date}."
                ),
                request_id: Some(*request_id),
            }];
            if let Some(staff) = assigned_staff {
                notices.push(RenderedNotice {
                    recipient: *staff,
                    message: format!(
                        "You have been assigned a maintenance task scheduled for {schedule_date}."
                    ),
                    request_id: Some(*request_id),
                });
            }
            notices
        }
    }
}
