//! Mindfulness session routes.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::mindfulness::{CreateMindfulnessSession, MindfulnessSession};
use crate::services::mindfulness as mindfulness_service;
use crate::AppState;

/// GET /api/v1/users/{user_id}/mindfulness-sessions
pub async fn list(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<MindfulnessSession>>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let sessions = mindfulness_service::list(&state.db, user_id).await?;
    Ok(ApiResponse::success(sessions))
}

/// POST /api/v1/users/{user_id}/mindfulness-sessions
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
    Json(body): Json<CreateMindfulnessSession>,
) -> Result<Json<ApiResponse<MindfulnessSession>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let session = mindfulness_service::create(&state.db, user_id, &body).await?;
    Ok(ApiResponse::success(session))
}
