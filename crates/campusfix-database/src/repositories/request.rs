//! Maintenance request repository implementation.
//!
//! The two assignment mutations (`claim`, `assign`) are single UPDATE
//! statements so that racing callers are serialized by the database:
//! `claim` only wins when `assigned_to` is still null at write time.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use campusfix_core::error::{AppError, ErrorKind};
use campusfix_core::result::AppResult;
use campusfix_core::types::pagination::{PageRequest, PageResponse};
use campusfix_entity::request::{
    MaintenanceRequest, NewRequest, RequestBucket, RequestFilter, RequestStatus,
};
use campusfix_entity::user::Role;

/// Repository for maintenance request rows.
#[derive(Debug, Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    /// Create a new request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new request. Status is forced to `pending` by the
    /// column default; `assigned_to` starts null.
    pub async fn create(
        &self,
        requester_id: Uuid,
        new: &NewRequest,
    ) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "INSERT INTO maintenance_requests \
             (requester_id, requester_name, requester_role, section, student_id, \
              description, building, floor, room, issue_photo) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(requester_id)
        .bind(&new.requester_name)
        .bind(&new.requester_role)
        .bind(&new.section)
        .bind(&new.student_id)
        .bind(&new.description)
        .bind(&new.building)
        .bind(&new.floor)
        .bind(&new.room)
        .bind(&new.issue_photo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create request", e))
    }

    /// Fetch a request by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch request", e))
    }

    /// List requests, newest first, applying the status filter and the
    /// role-dependent bucket contract from
    /// [`campusfix_entity::request::filter`].
    pub async fn list(
        &self,
        filter: &RequestFilter,
        role: Role,
        actor: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<MaintenanceRequest>> {
        let mut count_qb: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM maintenance_requests WHERE TRUE");
        push_conditions(&mut count_qb, filter, role, actor);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
            })?;

        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT * FROM maintenance_requests WHERE TRUE");
        push_conditions(&mut qb, filter, role, actor);
        qb.push(" ORDER BY created_at DESC LIMIT ");
        qb.push_bind(page.limit() as i64);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset() as i64);

        let requests = qb
            .build_query_as::<MaintenanceRequest>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list requests", e)
            })?;

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Set a non-completed status, bumping `updated_at`. Completion
    /// fields are untouched; use [`Self::complete`] for those.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: RequestStatus,
    ) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests SET status = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update status", e))
    }

    /// Mark a request completed, storing the completion fields.
    pub async fn complete(
        &self,
        id: Uuid,
        completion_notes: Option<&str>,
        completion_photo: Option<&str>,
    ) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests \
             SET status = 'completed', completion_notes = $2, completion_photo = $3, \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(completion_notes)
        .bind(completion_photo)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to complete request", e))
    }

    /// Claim an unassigned request for a staff member.
    ///
    /// Compare-and-swap: wins only if `assigned_to` is still null when
    /// the UPDATE runs. Returns `None` when the row was not matched
    /// (request missing or already taken); the caller discriminates.
    pub async fn claim(&self, id: Uuid, staff_id: Uuid) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests SET assigned_to = $2, updated_at = NOW() \
             WHERE id = $1 AND assigned_to IS NULL RETURNING *",
        )
        .bind(id)
        .bind(staff_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to claim request", e))
    }

    /// Assign a request to a staff member, overwriting any current
    /// assignee (admin override is unconditional).
    pub async fn assign(&self, id: Uuid, staff_id: Uuid) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests SET assigned_to = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(staff_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign request", e))
    }

    /// Release a request back to the unassigned pending pool. Only
    /// matches while `staff_id` is the assignee and the request is not
    /// completed; the caller turns a non-match into the precise error.
    pub async fn cancel_assignment(
        &self,
        id: Uuid,
        staff_id: Uuid,
    ) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests \
             SET assigned_to = NULL, status = 'pending', updated_at = NOW() \
             WHERE id = $1 AND assigned_to = $2 AND status <> 'completed' RETURNING *",
        )
        .bind(id)
        .bind(staff_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to cancel assignment", e)
        })
    }

    /// Administrative hard delete. Not part of the normal workflow;
    /// schedules cascade, notifications keep a nulled soft reference.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete request", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

/// Append the status and bucket WHERE conditions. Must mirror the
/// predicate in `campusfix_entity::request::filter` exactly.
fn push_conditions(
    qb: &mut QueryBuilder<'_, Postgres>,
    filter: &RequestFilter,
    role: Role,
    actor: Uuid,
) {
    if let Some(status) = filter.status {
        qb.push(" AND status = ");
        qb.push_bind(status);
    }
    match (filter.bucket, role) {
        (Some(RequestBucket::Available), Role::Admin) => {
            qb.push(" AND status = 'pending'");
        }
        (Some(RequestBucket::Assigned), Role::Admin) => {
            qb.push(" AND assigned_to IS NOT NULL");
        }
        (Some(RequestBucket::Available), _) => {
            qb.push(" AND status = 'pending' AND assigned_to IS NULL");
        }
        (Some(RequestBucket::Assigned), _) => {
            qb.push(" AND assigned_to = ");
            qb.push_bind(actor);
        }
        (None, _) => {}
    }
}
