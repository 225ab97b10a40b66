//! Calendar scheduling for maintenance visits.
//!
//! Scheduling is additive metadata: it never writes `status` or
//! `assigned_to` on the request itself. Those fields belong to the
//! lifecycle controller and the assignment manager, so the two
//! subsystems cannot race each other over them.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use campusfix_core::error::AppError;
use campusfix_core::events::{DomainEvent, EventPayload, ScheduleEvent};
use campusfix_database::repositories::request::RequestRepository;
use campusfix_database::repositories::schedule::ScheduleRepository;
use campusfix_entity::schedule::{Schedule, ScheduleEntry, validate_schedule_date};

use crate::context::RequestContext;
use crate::notification::NotificationDispatcher;

/// Manages the one-schedule-per-request calendar.
#[derive(Debug, Clone)]
pub struct ScheduleService {
    /// Schedule repository.
    schedule_repo: Arc<ScheduleRepository>,
    /// Request repository, for existence checks and requester lookup.
    request_repo: Arc<RequestRepository>,
    /// Best-effort notification sink.
    dispatcher: Arc<NotificationDispatcher>,
}

impl ScheduleService {
    /// Creates a new schedule service.
    pub fn new(
        schedule_repo: Arc<ScheduleRepository>,
        request_repo: Arc<RequestRepository>,
        dispatcher: Arc<NotificationDispatcher>,
    ) -> Self {
        Self {
            schedule_repo,
            request_repo,
            dispatcher,
        }
    }

    /// Create or overwrite the schedule for a request. Staff or admin
    /// only; retroactive dates are rejected.
    pub async fn set_schedule(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
        schedule_date: NaiveDate,
        estimated_duration: Option<String>,
        assigned_staff: Option<Uuid>,
    ) -> Result<Schedule, AppError> {
        if !ctx.can_work_requests() {
            return Err(AppError::authorization(
                "Only staff or admin may schedule visits",
            ));
        }
        validate_schedule_date(schedule_date, Utc::now().date_naive())?;

        let request = self
            .request_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Request {request_id} not found")))?;

        let schedule = self
            .schedule_repo
            .upsert(
                request_id,
                schedule_date,
                estimated_duration.as_deref(),
                assigned_staff,
            )
            .await?;

        info!(
            request_id = %request_id,
            schedule_date = %schedule_date,
            "Visit scheduled"
        );

        self.dispatcher
            .dispatch(&[DomainEvent::new(
                Some(ctx.user_id),
                EventPayload::Schedule(ScheduleEvent::Scheduled {
                    request_id,
                    requester_id: request.requester_id,
                    schedule_date,
                    assigned_staff,
                }),
            )])
            .await;

        Ok(schedule)
    }

    /// All schedules in a calendar month, joined with request summary
    /// fields. Read-only.
    pub async fn get_month_schedules(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<ScheduleEntry>, AppError> {
        let (from, to) = month_range(year, month)?;
        self.schedule_repo.find_in_range(from, to).await
    }
}

/// The half-open date range `[first of month, first of next month)`.
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), AppError> {
    let from = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::validation(format!("Invalid year/month: {year}-{month}")))?;
    let to = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::validation(format!("Invalid year/month: {year}-{month}")))?;
    Ok((from, to))
}
