//! Mood check-in service.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::mood::{CreateMoodEntry, MoodEntry};

pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<MoodEntry>, AppError> {
    let entries = sqlx::query_as::<_, MoodEntry>(
        "SELECT * FROM moods WHERE user_id = $1 ORDER BY entry_date DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    input: &CreateMoodEntry,
) -> Result<MoodEntry, AppError> {
    input.validate()?;

    let entry = sqlx::query_as::<_, MoodEntry>(
        "INSERT INTO moods (user_id, mood_rating, notes) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(user_id)
    .bind(input.mood_rating)
    .bind(&input.notes)
    .fetch_one(pool)
    .await?;
    Ok(entry)
}
