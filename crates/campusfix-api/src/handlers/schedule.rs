//! Schedule handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use crate::dto::request::{MonthQuery, SetScheduleBody};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/requests/:id/schedule
pub async fn set_schedule(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<SetScheduleBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let schedule = state
        .schedule_service
        .set_schedule(
            &auth,
            id,
            body.schedule_date,
            body.estimated_duration,
            body.assigned_staff,
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": schedule })))
}

/// GET /api/schedules?year=&month=
pub async fn month_schedules(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<MonthQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let entries = state
        .schedule_service
        .get_month_schedules(query.year, query.month)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": entries })))
}
