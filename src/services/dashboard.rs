//! Self-care dashboard aggregation: streak, mindfulness, journaling, goals, sleep.

use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::ProfileFields;
use crate::store::{SleepAverages, TaskCounts, WellnessStore};

/// Days of self-care history considered when looking for a streak.
const STREAK_WINDOW_DAYS: u64 = 30;

/// Trailing window for the mindfulness and sleep metrics.
const TRAILING_WINDOW_DAYS: i64 = 7;

/// Composite wellness summary for one user at one instant. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub streak: u32,
    pub mindfulness_minutes: u64,
    pub journal_entries: u64,
    pub goals_progress: u8,
    pub sleep_tracker: SleepTracker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepTracker {
    /// Average hours with one decimal place, e.g. `"7.5"`.
    pub average_hours: String,
    pub quality: u32,
}

/// Compute the dashboard snapshot for `user_id` with all windows anchored at `now`.
///
/// The five reads run concurrently. Any failing read fails the whole
/// snapshot; the failing metric is logged and reported as
/// [`AppError::ServiceUnavailable`].
pub async fn compute_snapshot(
    store: &dyn WellnessStore,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<DashboardSnapshot, AppError> {
    if user_id.is_nil() {
        return Err(AppError::Validation("user id is required".to_string()));
    }

    let today = now.date_naive();
    let streak_since = today
        .checked_sub_days(Days::new(STREAK_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);
    let trailing_since = now - Duration::days(TRAILING_WINDOW_DAYS);
    let sleep_since = trailing_since.date_naive();

    let (self_care_dates, mindfulness_seconds, journal_entries, task_counts, sleep) = tokio::try_join!(
        async {
            store
                .list_self_care_dates(user_id, streak_since)
                .await
                .map_err(|e| metric_failed(user_id, "streak", e))
        },
        async {
            store
                .sum_mindfulness_seconds(user_id, trailing_since, now)
                .await
                .map_err(|e| metric_failed(user_id, "mindfulness_minutes", e))
        },
        async {
            store
                .count_journal_entries(user_id)
                .await
                .map_err(|e| metric_failed(user_id, "journal_entries", e))
        },
        async {
            store
                .task_completion_counts(user_id)
                .await
                .map_err(|e| metric_failed(user_id, "goals_progress", e))
        },
        async {
            store
                .sleep_averages(user_id, sleep_since, today)
                .await
                .map_err(|e| metric_failed(user_id, "sleep_tracker", e))
        },
    )?;

    let snapshot = DashboardSnapshot {
        streak: current_streak(&self_care_dates, today),
        mindfulness_minutes: seconds_to_minutes(mindfulness_seconds),
        journal_entries: u64::try_from(journal_entries).unwrap_or(0),
        goals_progress: goals_progress(task_counts),
        sleep_tracker: sleep_tracker(sleep),
    };

    tracing::debug!(%user_id, streak = snapshot.streak, "Computed dashboard snapshot");
    Ok(snapshot)
}

fn metric_failed(user_id: Uuid, metric: &'static str, error: AppError) -> AppError {
    tracing::error!(%user_id, metric, error = %error, "Dashboard metric fetch failed");
    AppError::ServiceUnavailable(format!("could not load {metric}"))
}

/// Length of the most recent run of consecutive days ending at the latest logged date.
///
/// Only dates in `[today - 30 days, today]` count; later dates are ignored.
/// The run does not have to reach today: a user whose last activity was two
/// days ago still sees the length of that run.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let window_start = today
        .checked_sub_days(Days::new(STREAK_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);

    let mut days: Vec<NaiveDate> = dates
        .iter()
        .copied()
        .filter(|d| *d >= window_start && *d <= today)
        .collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some((&latest, earlier)) = days.split_first() else {
        return 0;
    };

    let mut streak = 1;
    let mut expected = latest.pred_opt();
    for &day in earlier {
        if Some(day) != expected {
            break;
        }
        streak += 1;
        expected = day.pred_opt();
    }
    streak
}

/// Whole minutes, rounded half away from zero. Negative totals count as zero.
fn seconds_to_minutes(seconds: i64) -> u64 {
    (seconds.max(0) as f64 / 60.0).round() as u64
}

/// Rounded percentage of completed tasks, 0 when there are none.
pub fn goals_progress(counts: TaskCounts) -> u8 {
    if counts.total <= 0 {
        return 0;
    }
    let completed = counts.completed.clamp(0, counts.total);
    percentage(completed as f64, counts.total as f64)
}

fn sleep_tracker(averages: SleepAverages) -> SleepTracker {
    let hours = non_negative(averages.average_hours);
    let quality = non_negative(averages.average_quality);
    SleepTracker {
        average_hours: format!("{hours:.1}"),
        quality: quality.round() as u32,
    }
}

fn non_negative(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

fn percentage(part: f64, whole: f64) -> u8 {
    (100.0 * part / whole).round().clamp(0.0, 100.0) as u8
}

/// Share of the twelve profile fields that are filled in, as a rounded percentage.
///
/// A field counts when it is present and not the empty string. A missing
/// profile scores 0.
pub fn profile_completeness(profile: Option<&ProfileFields>) -> u8 {
    let Some(profile) = profile else {
        return 0;
    };
    let filled = profile
        .values()
        .iter()
        .filter(|v| v.is_some_and(|s| !s.is_empty()))
        .count();
    percentage(filled as f64, ProfileFields::COUNT as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 18, 30, 0).unwrap()
    }

    fn days_ago(n: u64) -> NaiveDate {
        now().date_naive() - Days::new(n)
    }

    #[test]
    fn streak_counts_consecutive_days_before_today() {
        let dates = [days_ago(1), days_ago(2), days_ago(3)];
        assert_eq!(current_streak(&dates, days_ago(0)), 3);
    }

    #[test]
    fn streak_stops_at_the_first_gap() {
        let dates = [days_ago(1), days_ago(3)];
        assert_eq!(current_streak(&dates, days_ago(0)), 1);
    }

    #[test]
    fn streak_prefers_most_recent_run_over_longer_older_run() {
        let dates = [
            days_ago(0),
            days_ago(1),
            days_ago(5),
            days_ago(6),
            days_ago(7),
            days_ago(8),
        ];
        assert_eq!(current_streak(&dates, days_ago(0)), 2);
    }

    #[test]
    fn streak_ignores_duplicates_order_and_future_dates() {
        let future = days_ago(0) + Days::new(3);
        let dates = [days_ago(2), future, days_ago(0), days_ago(1), days_ago(0)];
        assert_eq!(current_streak(&dates, days_ago(0)), 3);
    }

    #[test]
    fn streak_ignores_dates_outside_window() {
        assert_eq!(current_streak(&[days_ago(31)], days_ago(0)), 0);
        assert_eq!(current_streak(&[days_ago(30)], days_ago(0)), 1);
        assert_eq!(current_streak(&[], days_ago(0)), 0);
    }

    #[test]
    fn goals_progress_rounds_and_handles_zero_tasks() {
        assert_eq!(goals_progress(TaskCounts { total: 3, completed: 1 }), 33);
        assert_eq!(goals_progress(TaskCounts { total: 3, completed: 2 }), 67);
        assert_eq!(goals_progress(TaskCounts { total: 0, completed: 0 }), 0);
        assert_eq!(goals_progress(TaskCounts { total: 2, completed: 5 }), 100);
        assert_eq!(goals_progress(TaskCounts { total: 4, completed: -1 }), 0);
    }

    #[test]
    fn minutes_round_half_up_and_never_negative() {
        assert_eq!(seconds_to_minutes(120), 2);
        assert_eq!(seconds_to_minutes(89), 1);
        assert_eq!(seconds_to_minutes(90), 2);
        assert_eq!(seconds_to_minutes(-600), 0);
    }

    #[test]
    fn sleep_tracker_formats_hours_and_rounds_quality() {
        let tracker = sleep_tracker(SleepAverages {
            average_hours: Some(7.333),
            average_quality: Some(3.6),
        });
        assert_eq!(tracker.average_hours, "7.3");
        assert_eq!(tracker.quality, 4);

        let empty = sleep_tracker(SleepAverages::default());
        assert_eq!(empty.average_hours, "0.0");
        assert_eq!(empty.quality, 0);
    }

    #[test]
    fn profile_completeness_half_filled() {
        let profile = ProfileFields {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            gender: Some("female".to_string()),
            phone: Some("555-0100".to_string()),
            languages: Some("English".to_string()),
            address: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(profile_completeness(Some(&profile)), 50);
        assert_eq!(profile_completeness(None), 0);
    }

    #[test]
    fn profile_completeness_full_profile_is_100() {
        let full = || Some("x".to_string());
        let profile = ProfileFields {
            first_name: full(),
            last_name: full(),
            email: full(),
            date_of_birth: full(),
            gender: full(),
            phone: full(),
            emergency_contact: full(),
            address: full(),
            country_timezone: full(),
            languages: full(),
            communication_preference: full(),
            profile_visibility: full(),
        };
        assert_eq!(profile_completeness(Some(&profile)), 100);
    }

    #[tokio::test]
    async fn empty_user_gets_zeroed_snapshot() {
        let store = InMemoryStore::new();
        let snapshot = compute_snapshot(&store, Uuid::new_v4(), now()).await.unwrap();
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            serde_json::json!({
                "streak": 0,
                "mindfulnessMinutes": 0,
                "journalEntries": 0,
                "goalsProgress": 0,
                "sleepTracker": { "averageHours": "0.0", "quality": 0 }
            })
        );
    }

    #[tokio::test]
    async fn snapshot_combines_all_metrics() {
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();
        let at_days_ago = |n: i64| now() - Duration::days(n);
        let store = InMemoryStore::new()
            .with_self_care_log(user, at_days_ago(1))
            .with_self_care_log(user, at_days_ago(2))
            .with_self_care_log(user, at_days_ago(3))
            .with_self_care_log(other, at_days_ago(0))
            .with_mindfulness_session(user, 90, true, at_days_ago(1))
            .with_mindfulness_session(user, 30, true, at_days_ago(6))
            .with_mindfulness_session(user, 600, false, at_days_ago(1))
            .with_mindfulness_session(user, 600, true, at_days_ago(8))
            .with_journal_entry(user)
            .with_journal_entry(user)
            .with_journal_entry(other)
            .with_task(user, true)
            .with_task(user, false)
            .with_task(user, false)
            .with_sleep_log(user, 7.0, 4.0, days_ago(1))
            .with_sleep_log(user, 8.0, 5.0, days_ago(2))
            .with_sleep_log(user, 3.0, 1.0, days_ago(20));

        let snapshot = compute_snapshot(&store, user, now()).await.unwrap();
        assert_eq!(snapshot.streak, 3);
        assert_eq!(snapshot.mindfulness_minutes, 2);
        assert_eq!(snapshot.journal_entries, 2);
        assert_eq!(snapshot.goals_progress, 33);
        assert_eq!(snapshot.sleep_tracker.average_hours, "7.5");
        assert_eq!(snapshot.sleep_tracker.quality, 5);
    }

    #[tokio::test]
    async fn trailing_window_includes_its_first_instant_and_day() {
        let user = Uuid::new_v4();
        let window_start = now() - Duration::days(7);
        let store = InMemoryStore::new()
            .with_mindfulness_session(user, 120, true, window_start)
            .with_mindfulness_session(user, 600, true, window_start - Duration::seconds(1))
            .with_sleep_log(user, 6.0, 3.0, days_ago(7))
            .with_sleep_log(user, 10.0, 5.0, days_ago(8));

        let snapshot = compute_snapshot(&store, user, now()).await.unwrap();
        assert_eq!(snapshot.mindfulness_minutes, 2);
        assert_eq!(snapshot.sleep_tracker.average_hours, "6.0");
        assert_eq!(snapshot.sleep_tracker.quality, 3);
    }

    #[tokio::test]
    async fn records_dated_after_now_are_ignored() {
        let user = Uuid::new_v4();
        let later = now() + Duration::days(3);
        let store = InMemoryStore::new()
            .with_self_care_log(user, later)
            .with_mindfulness_session(user, 600, true, later)
            .with_mindfulness_session(user, 600, true, now() + Duration::seconds(1))
            .with_mindfulness_session(user, 60, true, now())
            .with_sleep_log(user, 12.0, 5.0, days_ago(0) + Days::new(3))
            .with_sleep_log(user, 7.0, 4.0, days_ago(0));

        let snapshot = compute_snapshot(&store, user, now()).await.unwrap();
        assert_eq!(snapshot.streak, 0);
        assert_eq!(snapshot.mindfulness_minutes, 1);
        assert_eq!(snapshot.sleep_tracker.average_hours, "7.0");
        assert_eq!(snapshot.sleep_tracker.quality, 4);
    }

    #[tokio::test]
    async fn snapshot_is_idempotent() {
        let user = Uuid::new_v4();
        let store = InMemoryStore::new()
            .with_self_care_log(user, now())
            .with_task(user, true);
        let first = compute_snapshot(&store, user, now()).await.unwrap();
        let second = compute_snapshot(&store, user, now()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn any_failed_fetch_fails_the_snapshot() {
        for operation in [
            "list_self_care_dates",
            "sum_mindfulness_seconds",
            "count_journal_entries",
            "task_completion_counts",
            "sleep_averages",
        ] {
            let store = InMemoryStore::new().failing_on(operation);
            let err = compute_snapshot(&store, Uuid::new_v4(), now())
                .await
                .unwrap_err();
            assert!(
                matches!(err, AppError::ServiceUnavailable(_)),
                "{operation} should surface as unavailable"
            );
        }
    }

    #[tokio::test]
    async fn nil_user_is_rejected_before_fetching() {
        let store = InMemoryStore::new().failing_on("list_self_care_dates");
        let err = compute_snapshot(&store, Uuid::nil(), now()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
