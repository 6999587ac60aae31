//! Lifetime profile statistics shown on the account page.

use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::dashboard::profile_completeness;
use crate::store::WellnessStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStatistics {
    /// Distinct days with a mood check-in.
    pub mindful_days: i64,
    /// Mood check-ins that carry notes.
    pub journals_written: i64,
    /// Logged self-care activities.
    pub sessions_completed: i64,
    pub profile_completion: u8,
}

/// Gather the four account statistics concurrently.
pub async fn get_statistics(
    store: &dyn WellnessStore,
    user_id: Uuid,
) -> Result<UserStatistics, AppError> {
    if user_id.is_nil() {
        return Err(AppError::Validation("user id is required".to_string()));
    }

    let (mindful_days, journals_written, sessions_completed, profile) = tokio::try_join!(
        async {
            store
                .count_mood_days(user_id)
                .await
                .map_err(|e| statistic_failed(user_id, "mindful_days", e))
        },
        async {
            store
                .count_mood_notes(user_id)
                .await
                .map_err(|e| statistic_failed(user_id, "journals_written", e))
        },
        async {
            store
                .count_self_care_logs(user_id)
                .await
                .map_err(|e| statistic_failed(user_id, "sessions_completed", e))
        },
        async {
            store
                .get_user_profile_fields(user_id)
                .await
                .map_err(|e| statistic_failed(user_id, "profile_completion", e))
        },
    )?;

    Ok(UserStatistics {
        mindful_days,
        journals_written,
        sessions_completed,
        profile_completion: profile_completeness(profile.as_ref()),
    })
}

fn statistic_failed(user_id: Uuid, statistic: &'static str, error: AppError) -> AppError {
    tracing::error!(%user_id, statistic, error = %error, "User statistic fetch failed");
    AppError::ServiceUnavailable(format!("could not load {statistic}"))
}
