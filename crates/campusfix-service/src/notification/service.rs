//! Recipient-facing notification CRUD.

use std::sync::Arc;

use uuid::Uuid;

use campusfix_core::error::AppError;
use campusfix_core::types::pagination::{PageRequest, PageResponse};
use campusfix_database::repositories::notification::NotificationRepository;
use campusfix_entity::notification::Notification;

use crate::context::RequestContext;

/// Manages a recipient's own notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Lists the current user's notifications, newest first.
    pub async fn list_for(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notif_repo.find_by_recipient(ctx.user_id, &page).await
    }

    /// Counts the current user's unread notifications.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notif_repo.count_unread(ctx.user_id).await
    }

    /// Marks a notification as read.
    ///
    /// Idempotent: marking an already-read notification again is a
    /// silent no-op. Touching another user's notification is
    /// `Unauthorized`; a nonexistent id is `NotFound`.
    pub async fn mark_read(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let matched = self.notif_repo.mark_read(id, ctx.user_id).await?;
        if matched == 0 {
            return Err(self.missing_or_foreign(id).await?);
        }
        Ok(())
    }

    /// Marks every unread notification read for the current user,
    /// returning how many were flipped.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notif_repo.mark_all_read(ctx.user_id).await
    }

    /// Permanently deletes one of the current user's notifications.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let deleted = self.notif_repo.delete(id, ctx.user_id).await?;
        if deleted == 0 {
            return Err(self.missing_or_foreign(id).await?);
        }
        Ok(())
    }

    /// A recipient-scoped operation matched nothing: decide whether the
    /// row belongs to someone else or does not exist.
    async fn missing_or_foreign(&self, id: Uuid) -> Result<AppError, AppError> {
        if self.notif_repo.exists(id).await? {
            Ok(AppError::authorization(
                "Notification belongs to another user",
            ))
        } else {
            Ok(AppError::not_found(format!("Notification {id} not found")))
        }
    }
}
