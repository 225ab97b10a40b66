//! Resolves who is working on a ticket: admin-directed assignment,
//! staff self-claim, and claim cancellation.
//!
//! Claiming establishes ownership only; it deliberately does not move
//! the request to `in_progress`. Work state changes through the
//! lifecycle controller in a separate call.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use campusfix_core::error::AppError;
use campusfix_core::events::{DomainEvent, EventPayload, RequestEvent};
use campusfix_database::repositories::request::RequestRepository;
use campusfix_entity::request::{MaintenanceRequest, RequestStatus};
use campusfix_entity::user::Role;

use crate::context::RequestContext;
use crate::notification::NotificationDispatcher;

/// Manages `assigned_to` for maintenance requests.
#[derive(Debug, Clone)]
pub struct AssignmentService {
    /// Request repository.
    request_repo: Arc<RequestRepository>,
    /// Best-effort notification sink.
    dispatcher: Arc<NotificationDispatcher>,
}

impl AssignmentService {
    /// Creates a new assignment service.
    pub fn new(
        request_repo: Arc<RequestRepository>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            request_repo,
            dispatcher,
        }
    }

    /// Admin-directed assignment. Unconditional: overwrites any current
    /// assignee regardless of status, in a single UPDATE so a racing
    /// claim cannot interleave.
    pub async fn assign(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
        staff_id: Uuid,
    ) -> Result<MaintenanceRequest, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Only admin may assign requests"));
        }

        let updated = self
            .request_repo
            .assign(request_id, staff_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Request {request_id} not found")))?;

        info!(request_id = %request_id, staff = %staff_id, "Request assigned by admin");

        self.dispatcher
            .dispatch(&[DomainEvent::new(
                Some(ctx.user_id),
                EventPayload::Request(RequestEvent::Assigned {
                    request_id,
                    staff_id,
                }),
            )])
            .await;

        Ok(updated)
    }

    /// Staff self-claim of an unassigned request.
    ///
    /// The null check and the write are one compare-and-swap UPDATE;
    /// when two staff race, exactly one wins and the loser sees
    /// `AlreadyAssigned`.
    pub async fn claim(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
    ) -> Result<MaintenanceRequest, AppError> {
        if ctx.role != Role::Staff {
            return Err(AppError::authorization("Only staff may claim requests"));
        }

        match self.request_repo.claim(request_id, ctx.user_id).await? {
            Some(updated) => {
                info!(request_id = %request_id, staff = %ctx.user_id, "Request claimed");
                Ok(updated)
            }
            None => match self.request_repo.find_by_id(request_id).await? {
                Some(_) => Err(AppError::already_assigned("Request already taken")),
                None => Err(AppError::not_found(format!(
                    "Request {request_id} not found"
                ))),
            },
        }
    }

    /// Release a claimed request back to the unassigned pending pool.
    /// Staff only, and only the current assignee; completed requests
    /// cannot be released.
    pub async fn cancel_assignment(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
    ) -> Result<MaintenanceRequest, AppError> {
        if ctx.role != Role::Staff {
            return Err(AppError::authorization(
                "Only staff may cancel their assignment",
            ));
        }

        match self
            .request_repo
            .cancel_assignment(request_id, ctx.user_id)
            .await?
        {
            Some(updated) => {
                info!(request_id = %request_id, staff = %ctx.user_id, "Assignment cancelled");
                self.dispatcher
                    .dispatch(&[DomainEvent::new(
                        Some(ctx.user_id),
                        EventPayload::Request(RequestEvent::AssignmentCancelled { request_id }),
                    )])
                    .await;
                Ok(updated)
            }
            // The guarded UPDATE matched nothing: inspect the row to
            // report the precise reason.
            None => match self.request_repo.find_by_id(request_id).await? {
                Some(req) if !req.is_assignee(ctx.user_id) => Err(AppError::authorization(
                    "Only the current assignee may cancel this assignment",
                )),
                Some(req) if req.status == RequestStatus::Completed => Err(
                    AppError::invalid_state("Cannot cancel assignment on a completed request"),
                ),
                Some(_) => Err(AppError::conflict(
                    "Assignment changed concurrently, retry",
                )),
                None => Err(AppError::not_found(format!(
                    "Request {request_id} not found"
                ))),
            },
        }
    }
}
