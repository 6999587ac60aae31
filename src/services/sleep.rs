//! Sleep log service.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::sleep::{CreateSleepLog, SleepLog};

/// List a user's sleep logs, most recent night first.
pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<SleepLog>, AppError> {
    let logs = sqlx::query_as::<_, SleepLog>(
        "SELECT * FROM sleep_logs WHERE user_id = $1 ORDER BY log_date DESC, created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(logs)
}

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    input: &CreateSleepLog,
) -> Result<SleepLog, AppError> {
    input.validate()?;

    let log = sqlx::query_as::<_, SleepLog>(
        r#"
        INSERT INTO sleep_logs (user_id, sleep_duration_hours, sleep_quality, log_date, notes)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(input.sleep_duration_hours)
    .bind(input.sleep_quality)
    .bind(input.log_date)
    .bind(&input.notes)
    .fetch_one(pool)
    .await?;
    Ok(log)
}
