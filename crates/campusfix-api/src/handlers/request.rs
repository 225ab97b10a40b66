//! Maintenance request handlers: lifecycle and assignment endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use campusfix_core::error::AppError;
use campusfix_core::types::pagination::PageRequest;
use campusfix_entity::request::RequestFilter;

use crate::dto::request::{
    AssignBody, CompleteBody, CreateRequestBody, ListRequestsQuery, UpdateStatusBody,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/requests
pub async fn create_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateRequestBody>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let request = state
        .lifecycle_service
        .create(&auth, body.into_new_request())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "data": request })),
    ))
}

/// GET /api/requests
pub async fn list_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListRequestsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let filter = RequestFilter {
        status: query.status,
        bucket: query.bucket,
    };
    let page = PageRequest::new(query.page, query.per_page);
    let result = state.lifecycle_service.list(&auth, filter, page).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/requests/:id
pub async fn get_request(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = state.lifecycle_service.get(id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": request })))
}

/// PUT /api/requests/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = state
        .lifecycle_service
        .update_status(
            &auth,
            id,
            &body.status,
            body.completion_notes,
            body.completion_photo,
        )
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": request })))
}

/// PUT /api/requests/:id/complete
pub async fn complete_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<CompleteBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = state
        .lifecycle_service
        .complete(&auth, id, body.completion_notes, body.completion_photo)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": request })))
}

/// PUT /api/requests/:id/assign
pub async fn assign_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = state
        .assignment_service
        .assign(&auth, id, body.staff_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": request })))
}

/// POST /api/requests/:id/claim
pub async fn claim_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = state.assignment_service.claim(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": request })))
}

/// DELETE /api/requests/:id/assignment
pub async fn cancel_assignment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = state.assignment_service.cancel_assignment(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": request })))
}
