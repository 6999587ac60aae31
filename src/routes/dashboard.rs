//! Dashboard routes: the self-care snapshot and account statistics.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::services::dashboard::{self, DashboardSnapshot};
use crate::services::statistics::{self, UserStatistics};
use crate::AppState;

/// GET /api/v1/users/{user_id}/dashboard — streak, mindfulness, journal, goals and sleep tiles.
pub async fn snapshot(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<DashboardSnapshot>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let snapshot = dashboard::compute_snapshot(state.store.as_ref(), user_id, Utc::now()).await?;
    Ok(ApiResponse::success(snapshot))
}

/// GET /api/v1/users/{user_id}/statistics — lifetime counters and profile completion.
pub async fn user_statistics(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<UserStatistics>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let stats = statistics::get_statistics(state.store.as_ref(), user_id).await?;
    Ok(ApiResponse::success(stats))
}
