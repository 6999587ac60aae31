//! Task service: per-user to-do CRUD.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::ensure_not_blank;
use crate::models::task::{CreateTask, Task, UpdateTask};

/// List a user's tasks, newest first.
pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<Task>, AppError> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT * FROM tasks WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(tasks)
}

pub async fn create(pool: &PgPool, user_id: Uuid, input: &CreateTask) -> Result<Task, AppError> {
    ensure_not_blank("title", Some(&input.title))?;
    input.validate()?;

    let task = sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (user_id, title, description, due_date)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(input.title.trim())
    .bind(&input.description)
    .bind(input.due_date)
    .fetch_one(pool)
    .await?;
    Ok(task)
}

/// Update a task owned by `user_id`; tasks of other users are reported as not found.
pub async fn update(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    input: &UpdateTask,
) -> Result<Task, AppError> {
    ensure_not_blank("title", input.title.as_deref())?;
    input.validate()?;

    sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks SET
            title = COALESCE($3, title),
            description = COALESCE($4, description),
            due_date = COALESCE($5, due_date),
            completed = COALESCE($6, completed)
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(input.title.as_deref().map(str::trim))
    .bind(&input.description)
    .bind(input.due_date)
    .bind(input.completed)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
}

pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".to_string()));
    }
    Ok(())
}
