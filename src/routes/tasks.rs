//! Task routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::services::task as task_service;
use crate::AppState;

/// GET /api/v1/users/{user_id}/tasks
pub async fn list(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Task>>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let tasks = task_service::list(&state.db, user_id).await?;
    Ok(ApiResponse::success(tasks))
}

/// POST /api/v1/users/{user_id}/tasks
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
    Json(body): Json<CreateTask>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let task = task_service::create(&state.db, user_id, &body).await?;
    Ok(ApiResponse::success(task))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTask>,
) -> Result<Json<ApiResponse<Task>>, AppError> {
    let task = task_service::update(&state.db, current_user.id, id, &body).await?;
    Ok(ApiResponse::success(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<&'static str>>, AppError> {
    task_service::delete(&state.db, current_user.id, id).await?;
    Ok(ApiResponse::success("Task deleted"))
}
