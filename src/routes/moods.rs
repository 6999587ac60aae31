//! Mood check-in routes.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::mood::{CreateMoodEntry, MoodEntry};
use crate::services::mood as mood_service;
use crate::AppState;

/// GET /api/v1/users/{user_id}/moods
pub async fn list(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<MoodEntry>>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let moods = mood_service::list(&state.db, user_id).await?;
    Ok(ApiResponse::success(moods))
}

/// POST /api/v1/users/{user_id}/moods
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
    Json(body): Json<CreateMoodEntry>,
) -> Result<Json<ApiResponse<MoodEntry>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let mood = mood_service::create(&state.db, user_id, &body).await?;
    Ok(ApiResponse::success(mood))
}
