//! Mindfulness session service.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::ensure_not_blank;
use crate::models::mindfulness::{CreateMindfulnessSession, MindfulnessSession};

pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<MindfulnessSession>, AppError> {
    let sessions = sqlx::query_as::<_, MindfulnessSession>(
        "SELECT * FROM mindfulness_sessions WHERE user_id = $1 ORDER BY session_date DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(sessions)
}

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    input: &CreateMindfulnessSession,
) -> Result<MindfulnessSession, AppError> {
    ensure_not_blank("technique", Some(&input.technique))?;
    input.validate()?;

    let session = sqlx::query_as::<_, MindfulnessSession>(
        r#"
        INSERT INTO mindfulness_sessions (user_id, technique, duration_seconds, completed, notes)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(input.technique.trim())
    .bind(input.duration_seconds)
    .bind(input.completed)
    .bind(&input.notes)
    .fetch_one(pool)
    .await?;
    Ok(session)
}
