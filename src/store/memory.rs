//! In-memory [`WellnessStore`] for tests and local tooling.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::{SleepAverages, TaskCounts, WellnessStore};
use crate::errors::AppError;
use crate::models::user::ProfileFields;

#[derive(Debug, Clone)]
struct MindfulnessRecord {
    user_id: Uuid,
    duration_seconds: i64,
    completed: bool,
    session_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct SleepRecord {
    user_id: Uuid,
    hours: f64,
    quality: f64,
    log_date: NaiveDate,
}

#[derive(Debug, Clone)]
struct MoodRecord {
    user_id: Uuid,
    entry_date: DateTime<Utc>,
    notes: Option<String>,
}

/// Store backed by plain vectors, populated through the `with_*` builders.
///
/// `failing_on` makes the named query return a transport-style error so
/// callers can exercise their failure paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    self_care_logs: Vec<(Uuid, DateTime<Utc>)>,
    mindfulness: Vec<MindfulnessRecord>,
    journal_entries: Vec<Uuid>,
    tasks: Vec<(Uuid, bool)>,
    sleep_logs: Vec<SleepRecord>,
    moods: Vec<MoodRecord>,
    profiles: HashMap<Uuid, ProfileFields>,
    failing_on: Option<&'static str>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self_care_log(mut self, user_id: Uuid, completed_at: DateTime<Utc>) -> Self {
        self.self_care_logs.push((user_id, completed_at));
        self
    }

    pub fn with_mindfulness_session(
        mut self,
        user_id: Uuid,
        duration_seconds: i64,
        completed: bool,
        session_date: DateTime<Utc>,
    ) -> Self {
        self.mindfulness.push(MindfulnessRecord {
            user_id,
            duration_seconds,
            completed,
            session_date,
        });
        self
    }

    pub fn with_journal_entry(mut self, user_id: Uuid) -> Self {
        self.journal_entries.push(user_id);
        self
    }

    pub fn with_task(mut self, user_id: Uuid, completed: bool) -> Self {
        self.tasks.push((user_id, completed));
        self
    }

    pub fn with_sleep_log(
        mut self,
        user_id: Uuid,
        hours: f64,
        quality: f64,
        log_date: NaiveDate,
    ) -> Self {
        self.sleep_logs.push(SleepRecord {
            user_id,
            hours,
            quality,
            log_date,
        });
        self
    }

    pub fn with_mood(
        mut self,
        user_id: Uuid,
        entry_date: DateTime<Utc>,
        notes: Option<&str>,
    ) -> Self {
        self.moods.push(MoodRecord {
            user_id,
            entry_date,
            notes: notes.map(str::to_string),
        });
        self
    }

    pub fn with_profile(mut self, user_id: Uuid, profile: ProfileFields) -> Self {
        self.profiles.insert(user_id, profile);
        self
    }

    /// Make the query named `operation` (the trait method name) fail.
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing_on = Some(operation);
        self
    }

    fn check(&self, operation: &'static str) -> Result<(), AppError> {
        if self.failing_on == Some(operation) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[async_trait]
impl WellnessStore for InMemoryStore {
    async fn list_self_care_dates(
        &self,
        user_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AppError> {
        self.check("list_self_care_dates")?;
        let dates: BTreeSet<NaiveDate> = self
            .self_care_logs
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, at)| at.date_naive())
            .filter(|date| *date >= since)
            .collect();
        Ok(dates.into_iter().rev().collect())
    }

    async fn sum_mindfulness_seconds(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        self.check("sum_mindfulness_seconds")?;
        Ok(self
            .mindfulness
            .iter()
            .filter(|s| s.user_id == user_id && s.completed)
            .filter(|s| (since..=until).contains(&s.session_date))
            .map(|s| s.duration_seconds)
            .sum())
    }

    async fn count_journal_entries(&self, user_id: Uuid) -> Result<i64, AppError> {
        self.check("count_journal_entries")?;
        Ok(self.journal_entries.iter().filter(|u| **u == user_id).count() as i64)
    }

    async fn task_completion_counts(&self, user_id: Uuid) -> Result<TaskCounts, AppError> {
        self.check("task_completion_counts")?;
        let owned: Vec<bool> = self
            .tasks
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, completed)| *completed)
            .collect();
        Ok(TaskCounts {
            total: owned.len() as i64,
            completed: owned.iter().filter(|c| **c).count() as i64,
        })
    }

    async fn sleep_averages(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<SleepAverages, AppError> {
        self.check("sleep_averages")?;
        let logs: Vec<&SleepRecord> = self
            .sleep_logs
            .iter()
            .filter(|l| l.user_id == user_id && (since..=until).contains(&l.log_date))
            .collect();
        let hours: Vec<f64> = logs.iter().map(|l| l.hours).collect();
        let quality: Vec<f64> = logs.iter().map(|l| l.quality).collect();
        Ok(SleepAverages {
            average_hours: average(&hours),
            average_quality: average(&quality),
        })
    }

    async fn get_user_profile_fields(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileFields>, AppError> {
        self.check("get_user_profile_fields")?;
        Ok(self.profiles.get(&user_id).cloned())
    }

    async fn count_mood_days(&self, user_id: Uuid) -> Result<i64, AppError> {
        self.check("count_mood_days")?;
        let days: BTreeSet<NaiveDate> = self
            .moods
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.entry_date.date_naive())
            .collect();
        Ok(days.len() as i64)
    }

    async fn count_mood_notes(&self, user_id: Uuid) -> Result<i64, AppError> {
        self.check("count_mood_notes")?;
        Ok(self
            .moods
            .iter()
            .filter(|m| m.user_id == user_id)
            .filter(|m| m.notes.as_deref().is_some_and(|n| !n.is_empty()))
            .count() as i64)
    }

    async fn count_self_care_logs(&self, user_id: Uuid) -> Result<i64, AppError> {
        self.check("count_self_care_logs")?;
        Ok(self
            .self_care_logs
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .count() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn self_care_dates_are_distinct_and_newest_first() {
        let user = Uuid::new_v4();
        let store = InMemoryStore::new()
            .with_self_care_log(user, at(2025, 1, 10, 8))
            .with_self_care_log(user, at(2025, 1, 10, 20))
            .with_self_care_log(user, at(2025, 1, 12, 9))
            .with_self_care_log(Uuid::new_v4(), at(2025, 1, 11, 9));

        let since = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let dates = store.list_self_care_dates(user, since).await.unwrap();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn empty_sleep_window_has_no_averages() {
        let store = InMemoryStore::new();
        let since = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let until = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        let averages = store
            .sleep_averages(Uuid::new_v4(), since, until)
            .await
            .unwrap();
        assert_eq!(averages, SleepAverages::default());
    }

    #[tokio::test]
    async fn windowed_reads_include_both_ends_and_nothing_beyond() {
        let user = Uuid::new_v4();
        let since = at(2025, 1, 1, 12);
        let until = at(2025, 1, 8, 12);
        let one_second = chrono::Duration::seconds(1);
        let store = InMemoryStore::new()
            .with_mindfulness_session(user, 60, true, since)
            .with_mindfulness_session(user, 120, true, until)
            .with_mindfulness_session(user, 1000, true, since - one_second)
            .with_mindfulness_session(user, 1000, true, until + one_second)
            .with_sleep_log(user, 6.0, 2.0, since.date_naive())
            .with_sleep_log(user, 8.0, 4.0, until.date_naive())
            .with_sleep_log(user, 1.0, 1.0, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
            .with_sleep_log(user, 12.0, 5.0, NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());

        let seconds = store.sum_mindfulness_seconds(user, since, until).await.unwrap();
        assert_eq!(seconds, 180);

        let averages = store
            .sleep_averages(user, since.date_naive(), until.date_naive())
            .await
            .unwrap();
        assert_eq!(averages.average_hours, Some(7.0));
        assert_eq!(averages.average_quality, Some(3.0));
    }

    #[tokio::test]
    async fn failing_on_only_breaks_the_named_query() {
        let user = Uuid::new_v4();
        let store = InMemoryStore::new().failing_on("count_journal_entries");
        assert!(store.count_journal_entries(user).await.is_err());
        assert_eq!(store.count_self_care_logs(user).await.unwrap(), 0);
    }
}
