//! Journal routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::journal::{CreateJournalEntry, JournalEntry, UpdateJournalEntry};
use crate::services::journal as journal_service;
use crate::AppState;

/// GET /api/v1/users/{user_id}/journal
pub async fn list(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<JournalEntry>>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let entries = journal_service::list(&state.db, user_id).await?;
    Ok(ApiResponse::success(entries))
}

/// POST /api/v1/users/{user_id}/journal
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
    Json(body): Json<CreateJournalEntry>,
) -> Result<Json<ApiResponse<JournalEntry>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let entry = journal_service::create(&state.db, user_id, &body).await?;
    Ok(ApiResponse::success(entry))
}

/// PUT /api/v1/journal/{id}
pub async fn update(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateJournalEntry>,
) -> Result<Json<ApiResponse<JournalEntry>>, AppError> {
    let entry = journal_service::update(&state.db, current_user.id, id, &body).await?;
    Ok(ApiResponse::success(entry))
}

/// DELETE /api/v1/journal/{id}
pub async fn delete(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<&'static str>>, AppError> {
    journal_service::delete(&state.db, current_user.id, id).await?;
    Ok(ApiResponse::success("Journal entry deleted"))
}
