//! Profile routes.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::user::{UpdateEmail, UpdateProfile, UserProfile};
use crate::services::user as user_service;
use crate::AppState;

/// GET /api/v1/users/{user_id}
pub async fn get(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let user = user_service::find_by_id(&state.db, user_id).await?;
    Ok(ApiResponse::success(UserProfile::from(user)))
}

/// PUT /api/v1/users/{user_id} — partial profile update
pub async fn update(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateProfile>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let user = user_service::update_profile(&state.db, user_id, &body).await?;
    Ok(ApiResponse::success(UserProfile::from(user)))
}

/// PUT /api/v1/users/{user_id}/email
pub async fn update_email(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
    Json(body): Json<UpdateEmail>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let user = user_service::update_email(&state.db, user_id, &body).await?;
    Ok(ApiResponse::success(UserProfile::from(user)))
}
