//! Request lifecycle orchestration: create, status updates, completion,
//! and reads.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use campusfix_core::error::AppError;
use campusfix_core::events::{DomainEvent, EventPayload};
use campusfix_core::types::pagination::{PageRequest, PageResponse};
use campusfix_database::repositories::request::RequestRepository;
use campusfix_entity::request::{MaintenanceRequest, NewRequest, RequestFilter, RequestStatus};

use crate::context::RequestContext;
use crate::notification::NotificationDispatcher;

use super::transition::{TransitionPlan, plan_completion, plan_status_update};

/// Enforces the request state machine and its side effects.
#[derive(Debug, Clone)]
pub struct LifecycleService {
    /// Request repository.
    request_repo: Arc<RequestRepository>,
    /// Best-effort notification sink.
    dispatcher: Arc<NotificationDispatcher>,
    /// Product switch for silencing duplicate notices on no-op status
    /// re-issues. Defaults to off (duplicates preserved).
    suppress_noop_notice: bool,
}

impl LifecycleService {
    /// Creates a new lifecycle service.
    pub fn new(
        request_repo: Arc<RequestRepository>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            request_repo,
            dispatcher,
            suppress_noop_notice: false,
        }
    }

    /// File a new request. Any authenticated principal may create;
    /// status is forced to `pending` and the request starts unassigned.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        new: NewRequest,
    ) -> Result<MaintenanceRequest, AppError> {
        if new.description.trim().is_empty() {
            return Err(AppError::validation("description is required"));
        }
        if new.building.trim().is_empty() {
            return Err(AppError::validation("building is required"));
        }
        if new.room.trim().is_empty() {
            return Err(AppError::validation("room is required"));
        }

        let request = self.request_repo.create(ctx.user_id, &new).await?;
        info!(request_id = %request.id, requester = %ctx.user_id, "Maintenance request filed");
        Ok(request)
    }

    /// Fetch a request by id.
    pub async fn get(&self, id: Uuid) -> Result<MaintenanceRequest, AppError> {
        self.request_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))
    }

    /// List requests visible to the caller, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: RequestFilter,
        page: PageRequest,
    ) -> Result<PageResponse<MaintenanceRequest>, AppError> {
        self.request_repo
            .list(&filter, ctx.role, ctx.user_id, &page)
            .await
    }

    /// Change a request's status. Staff or admin only; `completed`
    /// delegates to [`Self::complete`]. Re-issuing the current status
    /// still bumps `updated_at` and still notifies the requester.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        new_status: &str,
        notes: Option<String>,
        photo: Option<String>,
    ) -> Result<MaintenanceRequest, AppError> {
        let request = self.get(id).await?;
        let new_status: RequestStatus = new_status.parse()?;

        let plan = plan_status_update(
            &request,
            new_status,
            notes,
            photo,
            ctx.role,
            self.suppress_noop_notice,
        )?;
        self.apply(ctx, id, plan).await
    }

    /// Mark a request completed, storing the completion fields.
    pub async fn complete(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        completion_notes: Option<String>,
        completion_photo: Option<String>,
    ) -> Result<MaintenanceRequest, AppError> {
        let request = self.get(id).await?;
        let plan = plan_completion(&request, completion_notes, completion_photo, ctx.role)?;
        self.apply(ctx, id, plan).await
    }

    /// Write a planned transition, then dispatch its events.
    async fn apply(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        plan: TransitionPlan,
    ) -> Result<MaintenanceRequest, AppError> {
        let updated = if plan.is_completion() {
            self.request_repo
                .complete(
                    id,
                    plan.completion_notes.as_deref(),
                    plan.completion_photo.as_deref(),
                )
                .await?
        } else {
            self.request_repo.update_status(id, plan.status).await?
        };
        let updated = updated.ok_or_else(|| AppError::not_found(format!("Request {id} not found")))?;

        info!(
            request_id = %id,
            status = %updated.status,
            actor = %ctx.user_id,
            "Request status written"
        );

        // State is committed; delivery is best-effort from here on.
        let events: Vec<DomainEvent> = plan
            .events
            .into_iter()
            .map(|e| DomainEvent::new(Some(ctx.user_id), EventPayload::Request(e)))
            .collect();
        self.dispatcher.dispatch(&events).await;

        Ok(updated)
    }
}
