//! Habit routes, including daily completions.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::habit::{
    CompleteHabit, CreateHabit, Habit, HabitCompletion, HabitWithCompletions, UpdateHabit,
};
use crate::services::habit as habit_service;
use crate::AppState;

/// GET /api/v1/users/{user_id}/habits — habits with their completion dates
pub async fn list(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<HabitWithCompletions>>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let habits = habit_service::list(&state.db, user_id).await?;
    Ok(ApiResponse::success(habits))
}

/// POST /api/v1/users/{user_id}/habits
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<String>,
    Json(body): Json<CreateHabit>,
) -> Result<Json<ApiResponse<Habit>>, AppError> {
    let user_id = current_user.authorize_user(&user_id)?;
    let habit = habit_service::create(&state.db, user_id, &body).await?;
    Ok(ApiResponse::success(habit))
}

/// PUT /api/v1/habits/{id}
pub async fn update(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateHabit>,
) -> Result<Json<ApiResponse<Habit>>, AppError> {
    let habit = habit_service::update(&state.db, current_user.id, id, &body).await?;
    Ok(ApiResponse::success(habit))
}

/// DELETE /api/v1/habits/{id}
pub async fn delete(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<&'static str>>, AppError> {
    habit_service::delete(&state.db, current_user.id, id).await?;
    Ok(ApiResponse::success("Habit deleted"))
}

/// POST /api/v1/habits/{id}/completions — mark a habit done for a day
pub async fn complete(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<CompleteHabit>,
) -> Result<Json<ApiResponse<HabitCompletion>>, AppError> {
    let completion = habit_service::complete(&state.db, current_user.id, id, &body).await?;
    Ok(ApiResponse::success(completion))
}
