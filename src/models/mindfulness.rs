//! Mindfulness (breathing, meditation) sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MindfulnessSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub technique: String,
    pub duration_seconds: i32,
    pub completed: bool,
    pub notes: Option<String>,
    pub session_date: DateTime<Utc>,
}

fn default_completed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMindfulnessSession {
    #[validate(length(min = 1, message = "is required"))]
    pub technique: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub duration_seconds: i32,
    /// Sessions count as completed unless the client says otherwise.
    #[serde(default = "default_completed")]
    pub completed: bool,
    pub notes: Option<String>,
}
