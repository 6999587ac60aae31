//! Read-only query interface consumed by the dashboard and statistics aggregators.
//!
//! Handlers never hand a raw pool to the aggregators; they go through a
//! [`WellnessStore`] so the same computation runs against Postgres in
//! production and against [`memory::InMemoryStore`] in tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::ProfileFields;

pub use memory::InMemoryStore;
pub use postgres::PgWellnessStore;

/// Total and completed task counts for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: i64,
    pub completed: i64,
}

/// Sleep averages over a window; `None` when the window holds no logs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SleepAverages {
    pub average_hours: Option<f64>,
    pub average_quality: Option<f64>,
}

/// Per-user aggregate reads. Empty result sets are values, never errors;
/// an `Err` always means the backing store could not answer.
#[async_trait]
pub trait WellnessStore: Send + Sync + std::fmt::Debug {
    /// Distinct UTC calendar dates with at least one self-care log entry on or after `since`.
    async fn list_self_care_dates(
        &self,
        user_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AppError>;

    /// Total seconds of completed mindfulness sessions dated in `[since, until]`.
    async fn sum_mindfulness_seconds(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<i64, AppError>;

    async fn count_journal_entries(&self, user_id: Uuid) -> Result<i64, AppError>;

    async fn task_completion_counts(&self, user_id: Uuid) -> Result<TaskCounts, AppError>;

    /// Average duration and quality of sleep logs dated in `[since, until]`.
    async fn sleep_averages(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<SleepAverages, AppError>;

    /// Profile fields used for completeness scoring; `None` for an unknown user.
    async fn get_user_profile_fields(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileFields>, AppError>;

    /// Distinct calendar dates with a mood entry.
    async fn count_mood_days(&self, user_id: Uuid) -> Result<i64, AppError>;

    /// Mood entries carrying non-empty notes.
    async fn count_mood_notes(&self, user_id: Uuid) -> Result<i64, AppError>;

    async fn count_self_care_logs(&self, user_id: Uuid) -> Result<i64, AppError>;
}
