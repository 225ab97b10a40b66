//! Schedule repository implementation.
//!
//! One row per request, enforced by a UNIQUE constraint; `upsert`
//! overwrites in place (latest write wins, no history).

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use campusfix_core::error::{AppError, ErrorKind};
use campusfix_core::result::AppResult;
use campusfix_entity::schedule::{Schedule, ScheduleEntry};

/// Repository for schedule rows.
#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    pool: PgPool,
}

impl ScheduleRepository {
    /// Create a new schedule repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create or overwrite the schedule for a request.
    pub async fn upsert(
        &self,
        request_id: Uuid,
        schedule_date: NaiveDate,
        estimated_duration: Option<&str>,
        assigned_staff: Option<Uuid>,
    ) -> AppResult<Schedule> {
        sqlx::query_as::<_, Schedule>(
            "INSERT INTO schedules (request_id, schedule_date, estimated_duration, assigned_staff) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (request_id) DO UPDATE SET \
                 schedule_date = EXCLUDED.schedule_date, \
                 estimated_duration = EXCLUDED.estimated_duration, \
                 assigned_staff = EXCLUDED.assigned_staff, \
                 created_at = NOW() \
             RETURNING *",
        )
        .bind(request_id)
        .bind(schedule_date)
        .bind(estimated_duration)
        .bind(assigned_staff)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert schedule", e))
    }

    /// Fetch the schedule for a request, if one exists.
    pub async fn find_by_request(&self, request_id: Uuid) -> AppResult<Option<Schedule>> {
        sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE request_id = $1")
            .bind(request_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch schedule", e))
    }

    /// List all schedules whose date falls in `[from, to)`, joined with
    /// the owning request's summary fields for display.
    pub async fn find_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<ScheduleEntry>> {
        sqlx::query_as::<_, ScheduleEntry>(
            "SELECT s.id, s.request_id, s.schedule_date, s.estimated_duration, \
                    s.assigned_staff, s.created_at, \
                    r.description, r.building, r.room, r.status \
             FROM schedules s \
             JOIN maintenance_requests r ON r.id = s.request_id \
             WHERE s.schedule_date >= $1 AND s.schedule_date < $2 \
             ORDER BY s.schedule_date, s.created_at",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list schedules", e))
    }
}
