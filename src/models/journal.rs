//! Journal entries.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub mood: Option<String>,
    pub tags: Option<String>,
    pub is_favorite: bool,
    pub reminder_date: Option<NaiveDate>,
    pub reminder_time: Option<NaiveTime>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJournalEntry {
    pub title: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub content: String,
    pub mood: Option<String>,
    pub tags: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub reminder_date: Option<NaiveDate>,
    pub reminder_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct UpdateJournalEntry {
    pub title: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: Option<String>,
    pub mood: Option<String>,
    pub tags: Option<String>,
    pub is_favorite: Option<bool>,
    pub reminder_date: Option<NaiveDate>,
    pub reminder_time: Option<NaiveTime>,
}
