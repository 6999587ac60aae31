//! Self-care catalog and activity log routes.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::selfcare::{LogSelfCareActivity, SelfCareActivity, SelfCareLogEntry};
use crate::services::selfcare as selfcare_service;
use crate::AppState;

/// GET /api/v1/selfcare/activities — shared activity catalog
pub async fn activities(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<SelfCareActivity>>>, AppError> {
    let activities = selfcare_service::list_activities(&state.db).await?;
    Ok(ApiResponse::success(activities))
}

/// GET /api/v1/users/{user_id}/selfcare/log
pub async fn list_log(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<SelfCareLogEntry>>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let entries = selfcare_service::list_log(&state.db, user_id).await?;
    Ok(ApiResponse::success(entries))
}

/// POST /api/v1/users/{user_id}/selfcare/log
pub async fn log_activity(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
    Json(body): Json<LogSelfCareActivity>,
) -> Result<Json<ApiResponse<SelfCareLogEntry>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let entry = selfcare_service::log_activity(&state.db, user_id, &body).await?;
    Ok(ApiResponse::success(entry))
}
