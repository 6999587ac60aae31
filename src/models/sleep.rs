//! Nightly sleep logs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SleepLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sleep_duration_hours: f64,
    /// 1 (poor) to 5 (great).
    pub sleep_quality: i16,
    pub log_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSleepLog {
    #[validate(range(min = 0.0, max = 24.0, message = "must be between 0 and 24 hours"))]
    pub sleep_duration_hours: f64,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub sleep_quality: i16,
    pub log_date: NaiveDate,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_out_of_range_is_rejected() {
        let input = CreateSleepLog {
            sleep_duration_hours: 7.5,
            sleep_quality: 9,
            log_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            notes: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("sleep_quality"));
    }

    #[test]
    fn duration_beyond_a_day_is_rejected() {
        let input = CreateSleepLog {
            sleep_duration_hours: 30.0,
            sleep_quality: 3,
            log_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            notes: None,
        };
        assert!(input.validate().is_err());
    }
}
