//! Sleep log routes.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::sleep::{CreateSleepLog, SleepLog};
use crate::services::sleep as sleep_service;
use crate::AppState;

/// GET /api/v1/users/{user_id}/sleep-logs
pub async fn list(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<SleepLog>>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let logs = sleep_service::list(&state.db, user_id).await?;
    Ok(ApiResponse::success(logs))
}

/// POST /api/v1/users/{user_id}/sleep-logs
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
    Json(body): Json<CreateSleepLog>,
) -> Result<Json<ApiResponse<SleepLog>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let log = sleep_service::create(&state.db, user_id, &body).await?;
    Ok(ApiResponse::success(log))
}
