//! Mood check-ins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood_rating: i16,
    pub notes: Option<String>,
    pub entry_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMoodEntry {
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub mood_rating: i16,
    pub notes: Option<String>,
}
