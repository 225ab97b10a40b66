//! Notification repository implementation.
//!
//! All read-flag and delete operations are recipient-scoped in the
//! WHERE clause, so a caller can never touch another user's rows.

use sqlx::PgPool;
use uuid::Uuid;

use campusfix_core::error::{AppError, ErrorKind};
use campusfix_core::result::AppResult;
use campusfix_core::types::pagination::{PageRequest, PageResponse};
use campusfix_entity::notification::Notification;

/// Repository for notification rows.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a notification, unread by default.
    pub async fn create(
        &self,
        recipient: Uuid,
        message: &str,
        request_id: Option<Uuid>,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (recipient, message, request_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(recipient)
        .bind(message)
        .bind(request_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    /// List notifications for a recipient, newest first.
    pub async fn find_by_recipient(
        &self,
        recipient: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE recipient = $1")
                .bind(recipient)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
                })?;

        let notifs = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE recipient = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(recipient)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;

        Ok(PageResponse::new(
            notifs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count unread notifications for a recipient.
    pub async fn count_unread(&self, recipient: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient = $1 AND is_read = FALSE",
        )
        .bind(recipient)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Check whether a notification id exists at all (any recipient).
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM notifications WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check notification", e)
            })
    }

    /// Mark one notification read for its recipient. Returns the number
    /// of rows matched; marking an already-read row still matches, so
    /// repeated calls are a silent no-op.
    pub async fn mark_read(&self, id: Uuid, recipient: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1 AND recipient = $2")
                .bind(id)
                .bind(recipient)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected())
    }

    /// Mark every unread notification read for a recipient.
    pub async fn mark_all_read(&self, recipient: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE recipient = $1 AND is_read = FALSE",
        )
        .bind(recipient)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }

    /// Permanently remove a notification for its recipient. Returns the
    /// number of rows deleted.
    pub async fn delete(&self, id: Uuid, recipient: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND recipient = $2")
            .bind(id)
            .bind(recipient)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected())
    }
}
