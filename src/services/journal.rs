//! Journal service.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::ensure_not_blank;
use crate::models::journal::{CreateJournalEntry, JournalEntry, UpdateJournalEntry};

pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<JournalEntry>, AppError> {
    let entries = sqlx::query_as::<_, JournalEntry>(
        "SELECT * FROM journal_entries WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    input: &CreateJournalEntry,
) -> Result<JournalEntry, AppError> {
    ensure_not_blank("content", Some(&input.content))?;
    input.validate()?;

    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO journal_entries
            (user_id, title, content, mood, tags, is_favorite, reminder_date, reminder_time)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&input.title)
    .bind(&input.content)
    .bind(&input.mood)
    .bind(&input.tags)
    .bind(input.is_favorite)
    .bind(input.reminder_date)
    .bind(input.reminder_time)
    .fetch_one(pool)
    .await?;
    Ok(entry)
}

pub async fn update(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    input: &UpdateJournalEntry,
) -> Result<JournalEntry, AppError> {
    ensure_not_blank("content", input.content.as_deref())?;
    input.validate()?;

    sqlx::query_as::<_, JournalEntry>(
        r#"
        UPDATE journal_entries SET
            title = COALESCE($3, title),
            content = COALESCE($4, content),
            mood = COALESCE($5, mood),
            tags = COALESCE($6, tags),
            is_favorite = COALESCE($7, is_favorite),
            reminder_date = COALESCE($8, reminder_date),
            reminder_time = COALESCE($9, reminder_time),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&input.title)
    .bind(&input.content)
    .bind(&input.mood)
    .bind(&input.tags)
    .bind(input.is_favorite)
    .bind(input.reminder_date)
    .bind(input.reminder_time)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Journal entry not found".to_string()))
}

pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Journal entry not found".to_string()));
    }
    Ok(())
}
