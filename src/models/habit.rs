//! Habits ("goals" in the habit tracker) and their daily completions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyType {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl FrequencyType {
    /// Stored column value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Habit {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub target_frequency: i32,
    pub frequency_type: String,
    pub color: String,
    pub icon: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Habit with the dates it was completed on, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct HabitWithCompletions {
    #[serde(flatten)]
    pub habit: Habit,
    pub completions: Vec<NaiveDate>,
}

#[derive(Debug, Clone, FromRow)]
pub struct HabitCompletionRow {
    pub habit_id: Uuid,
    pub completion_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HabitCompletion {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub user_id: Uuid,
    pub completion_date: NaiveDate,
    pub notes: Option<String>,
    pub completed_at: DateTime<Utc>,
}

pub const DEFAULT_COLOR: &str = "#007bff";
pub const DEFAULT_ICON: &str = "star";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHabit {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub target_frequency: Option<i32>,
    pub frequency_type: Option<FrequencyType>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct UpdateHabit {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub target_frequency: Option<i32>,
    pub frequency_type: Option<FrequencyType>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompleteHabit {
    /// Defaults to today (UTC).
    pub completion_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_type_serializes_lowercase() {
        let json = serde_json::to_string(&FrequencyType::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");
        assert_eq!(FrequencyType::default().as_str(), "daily");
    }

    #[test]
    fn habit_with_completions_flattens_habit_fields() {
        let habit = Habit {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            name: "Stretch".to_string(),
            description: None,
            category: None,
            target_frequency: 1,
            frequency_type: FrequencyType::Daily.as_str().to_string(),
            color: DEFAULT_COLOR.to_string(),
            icon: DEFAULT_ICON.to_string(),
            is_active: true,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(HabitWithCompletions {
            habit,
            completions: vec![NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()],
        })
        .unwrap();
        assert_eq!(value["name"], "Stretch");
        assert_eq!(value["completions"][0], "2025-02-01");
    }
}
