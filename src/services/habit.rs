//! Habit tracker service: habits, their completions, and per-habit completion history.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::ensure_not_blank;
use crate::models::habit::{
    CompleteHabit, CreateHabit, Habit, HabitCompletion, HabitCompletionRow, HabitWithCompletions,
    UpdateHabit, DEFAULT_COLOR, DEFAULT_ICON,
};

/// Active habits for a user with the dates each one was completed on.
pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<HabitWithCompletions>, AppError> {
    let (habits, completions) = tokio::try_join!(
        sqlx::query_as::<_, Habit>(
            "SELECT * FROM habits WHERE user_id = $1 AND is_active = TRUE ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool),
        sqlx::query_as::<_, HabitCompletionRow>(
            r#"
            SELECT habit_id, completion_date
            FROM habit_completions
            WHERE user_id = $1
            ORDER BY completion_date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool),
    )?;

    Ok(attach_completions(habits, completions))
}

/// Group completion rows under their habit, preserving habit order.
fn attach_completions(
    habits: Vec<Habit>,
    completions: Vec<HabitCompletionRow>,
) -> Vec<HabitWithCompletions> {
    let mut by_habit: HashMap<Uuid, Vec<_>> = HashMap::new();
    for row in completions {
        by_habit.entry(row.habit_id).or_default().push(row.completion_date);
    }

    habits
        .into_iter()
        .map(|habit| {
            let completions = by_habit.remove(&habit.id).unwrap_or_default();
            HabitWithCompletions { habit, completions }
        })
        .collect()
}

pub async fn create(pool: &PgPool, user_id: Uuid, input: &CreateHabit) -> Result<Habit, AppError> {
    ensure_not_blank("name", Some(&input.name))?;
    input.validate()?;

    let habit = sqlx::query_as::<_, Habit>(
        r#"
        INSERT INTO habits
            (user_id, name, description, category, target_frequency, frequency_type, color, icon)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(input.name.trim())
    .bind(&input.description)
    .bind(&input.category)
    .bind(input.target_frequency.unwrap_or(1))
    .bind(input.frequency_type.unwrap_or_default().as_str())
    .bind(input.color.as_deref().unwrap_or(DEFAULT_COLOR))
    .bind(input.icon.as_deref().unwrap_or(DEFAULT_ICON))
    .fetch_one(pool)
    .await?;
    Ok(habit)
}

pub async fn update(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    input: &UpdateHabit,
) -> Result<Habit, AppError> {
    ensure_not_blank("name", input.name.as_deref())?;
    input.validate()?;

    sqlx::query_as::<_, Habit>(
        r#"
        UPDATE habits SET
            name = COALESCE($3, name),
            description = COALESCE($4, description),
            category = COALESCE($5, category),
            target_frequency = COALESCE($6, target_frequency),
            frequency_type = COALESCE($7, frequency_type),
            color = COALESCE($8, color),
            icon = COALESCE($9, icon),
            is_active = COALESCE($10, is_active)
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(input.name.as_deref().map(str::trim))
    .bind(&input.description)
    .bind(&input.category)
    .bind(input.target_frequency)
    .bind(input.frequency_type.map(|f| f.as_str()))
    .bind(&input.color)
    .bind(&input.icon)
    .bind(input.is_active)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Habit not found".to_string()))
}

pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM habits WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Habit not found".to_string()));
    }
    Ok(())
}

/// Mark a habit done for a date. Completing the same date twice updates the notes.
pub async fn complete(
    pool: &PgPool,
    user_id: Uuid,
    habit_id: Uuid,
    input: &CompleteHabit,
) -> Result<HabitCompletion, AppError> {
    let completion_date = input
        .completion_date
        .unwrap_or_else(|| Utc::now().date_naive());

    sqlx::query_as::<_, HabitCompletion>(
        r#"
        INSERT INTO habit_completions (habit_id, user_id, completion_date, notes)
        SELECT id, user_id, $3, $4 FROM habits WHERE id = $1 AND user_id = $2
        ON CONFLICT (habit_id, completion_date)
        DO UPDATE SET notes = EXCLUDED.notes, completed_at = NOW()
        RETURNING *
        "#,
    )
    .bind(habit_id)
    .bind(user_id)
    .bind(completion_date)
    .bind(&input.notes)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Habit not found".to_string()))
}
