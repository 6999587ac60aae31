//! Self-care catalogue and activity log.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::selfcare::{LogSelfCareActivity, SelfCareActivity, SelfCareLogEntry};

/// The activity catalogue, grouped by category.
pub async fn list_activities(pool: &PgPool) -> Result<Vec<SelfCareActivity>, AppError> {
    let activities = sqlx::query_as::<_, SelfCareActivity>(
        "SELECT id, name, category, description FROM self_care_activities ORDER BY category, name",
    )
    .fetch_all(pool)
    .await?;
    Ok(activities)
}

/// A user's logged activities, newest first.
pub async fn list_log(pool: &PgPool, user_id: Uuid) -> Result<Vec<SelfCareLogEntry>, AppError> {
    let entries = sqlx::query_as::<_, SelfCareLogEntry>(
        r#"
        SELECT l.id, l.activity_id, a.name, a.category, l.notes, l.completed_at
        FROM self_care_logs l
        INNER JOIN self_care_activities a ON a.id = l.activity_id
        WHERE l.user_id = $1
        ORDER BY l.completed_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

/// Record a completed activity for a user.
pub async fn log_activity(
    pool: &PgPool,
    user_id: Uuid,
    input: &LogSelfCareActivity,
) -> Result<SelfCareLogEntry, AppError> {
    let entry = sqlx::query_as::<_, SelfCareLogEntry>(
        r#"
        WITH inserted AS (
            INSERT INTO self_care_logs (user_id, activity_id, notes)
            SELECT $1, id, $3 FROM self_care_activities WHERE id = $2
            RETURNING id, activity_id, notes, completed_at
        )
        SELECT i.id, i.activity_id, a.name, a.category, i.notes, i.completed_at
        FROM inserted i
        INNER JOIN self_care_activities a ON a.id = i.activity_id
        "#,
    )
    .bind(user_id)
    .bind(input.activity_id)
    .bind(&input.notes)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Self-care activity not found".to_string()))?;

    tracing::debug!(%user_id, activity_id = %entry.activity_id, "Logged self-care activity");
    Ok(entry)
}
