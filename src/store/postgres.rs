//! Postgres-backed [`WellnessStore`].

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{SleepAverages, TaskCounts, WellnessStore};
use crate::errors::AppError;
use crate::models::user::ProfileFields;

/// Aggregate queries over the shared connection pool.
#[derive(Debug, Clone)]
pub struct PgWellnessStore {
    pool: PgPool,
}

impl PgWellnessStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Intermediate row for the task conditional aggregation.
#[derive(Debug, sqlx::FromRow)]
struct TaskCountsRow {
    total: i64,
    completed: i64,
}

/// Intermediate row for the sleep averages.
#[derive(Debug, sqlx::FromRow)]
struct SleepAveragesRow {
    average_hours: Option<f64>,
    average_quality: Option<f64>,
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[async_trait]
impl WellnessStore for PgWellnessStore {
    async fn list_self_care_dates(
        &self,
        user_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AppError> {
        let dates = sqlx::query_scalar::<_, NaiveDate>(
            r#"
            SELECT DISTINCT (completed_at AT TIME ZONE 'UTC')::DATE AS activity_date
            FROM self_care_logs
            WHERE user_id = $1 AND completed_at >= $2
            ORDER BY activity_date DESC
            "#,
        )
        .bind(user_id)
        .bind(start_of_day(since))
        .fetch_all(&self.pool)
        .await?;
        Ok(dates)
    }

    async fn sum_mindfulness_seconds(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(duration_seconds), 0)::BIGINT
            FROM mindfulness_sessions
            WHERE user_id = $1 AND completed = TRUE
              AND session_date >= $2 AND session_date <= $3
            "#,
        )
        .bind(user_id)
        .bind(since)
        .bind(until)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    async fn count_journal_entries(&self, user_id: Uuid) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM journal_entries WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn task_completion_counts(&self, user_id: Uuid) -> Result<TaskCounts, AppError> {
        let row = sqlx::query_as::<_, TaskCountsRow>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE completed) AS completed
            FROM tasks
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(TaskCounts {
            total: row.total,
            completed: row.completed,
        })
    }

    async fn sleep_averages(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<SleepAverages, AppError> {
        let row = sqlx::query_as::<_, SleepAveragesRow>(
            r#"
            SELECT
                AVG(sleep_duration_hours)::FLOAT8 AS average_hours,
                AVG(sleep_quality)::FLOAT8 AS average_quality
            FROM sleep_logs
            WHERE user_id = $1 AND log_date >= $2 AND log_date <= $3
            "#,
        )
        .bind(user_id)
        .bind(since)
        .bind(until)
        .fetch_one(&self.pool)
        .await?;

        Ok(SleepAverages {
            average_hours: row.average_hours,
            average_quality: row.average_quality,
        })
    }

    async fn get_user_profile_fields(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileFields>, AppError> {
        let profile = sqlx::query_as::<_, ProfileFields>(
            r#"
            SELECT first_name, last_name, email, date_of_birth::TEXT AS date_of_birth,
                   gender, phone, emergency_contact, address, country_timezone,
                   languages, communication_preference, profile_visibility
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(profile)
    }

    async fn count_mood_days(&self, user_id: Uuid) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT (entry_date AT TIME ZONE 'UTC')::DATE) FROM moods WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn count_mood_notes(&self, user_id: Uuid) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM moods WHERE user_id = $1 AND notes IS NOT NULL AND notes <> ''",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn count_self_care_logs(&self, user_id: Uuid) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM self_care_logs WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_day_is_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(start_of_day(date).to_rfc3339(), "2025-03-09T00:00:00+00:00");
    }
}
