//! Seed script for development — populates a fresh database with a demo account.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use anyhow::Context;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const DEMO_USERNAME: &str = "demo";
const DEMO_EMAIL: &str = "demo@wellness.local";
const DEMO_PASSWORD: &str = "Demo123!";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = wellness::db::create_pool(&db_url, 5, 5).await?;

    wellness::db::migrate(&pool).await?;

    println!("=== Wellness Seed Script ===");

    let user_id = seed_demo_user(&pool).await?;
    seed_tracking_week(&pool, user_id).await?;
    seed_tasks_and_journal(&pool, user_id).await?;
    seed_habit(&pool, user_id).await?;

    println!("\n=== Seed complete! ===");
    println!("Demo login: {DEMO_EMAIL} / {DEMO_PASSWORD}");

    Ok(())
}

async fn seed_demo_user(pool: &PgPool) -> anyhow::Result<Uuid> {
    let hash = wellness::services::auth::hash_password(DEMO_PASSWORD)?;

    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
        .bind(DEMO_USERNAME)
        .fetch_optional(pool)
        .await?;

    if let Some(id) = existing {
        sqlx::query("UPDATE users SET password_hash = $1, updated_at = NOW() WHERE id = $2")
            .bind(&hash)
            .bind(id)
            .execute(pool)
            .await?;
        println!("[done] Updated demo password");
        return Ok(id);
    }

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash, first_name, last_name, phone,
                            city, state, country_timezone, languages)
         VALUES ($1, $2, $3, 'Demo', 'User', '555-0100', 'Portland', 'OR',
                 'America/Los_Angeles', 'English')
         RETURNING id",
    )
    .bind(DEMO_USERNAME)
    .bind(DEMO_EMAIL)
    .bind(&hash)
    .fetch_one(pool)
    .await?;

    println!("[done] Created demo user {id}");
    Ok(id)
}

/// One week of self-care, mindfulness, sleep and mood records ending today.
async fn seed_tracking_week(pool: &PgPool, user_id: Uuid) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM self_care_logs WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Tracking records already exist ({count} self-care logs)");
        return Ok(());
    }

    let activity_ids: Vec<Uuid> =
        sqlx::query_scalar("SELECT id FROM self_care_activities ORDER BY name")
            .fetch_all(pool)
            .await?;
    if activity_ids.is_empty() {
        anyhow::bail!("self_care_activities catalog is empty; migrations did not seed it");
    }

    let now = Utc::now();
    for day in 0..7i64 {
        let at = now - Duration::days(day);

        // Day 4 is left blank so the demo streak stops at four.
        if day != 4 {
            sqlx::query(
                "INSERT INTO self_care_logs (user_id, activity_id, notes, completed_at)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(user_id)
            .bind(activity_ids[day as usize % activity_ids.len()])
            .bind(format!("Day {} check-in", 7 - day))
            .bind(at)
            .execute(pool)
            .await?;
        }

        sqlx::query(
            "INSERT INTO mindfulness_sessions (user_id, technique, duration_seconds, completed, session_date)
             VALUES ($1, $2, $3, TRUE, $4)",
        )
        .bind(user_id)
        .bind(if day % 2 == 0 { "box breathing" } else { "body scan" })
        .bind(300 + 60 * day as i32)
        .bind(at)
        .execute(pool)
        .await?;

        sqlx::query(
            "INSERT INTO sleep_logs (user_id, sleep_duration_hours, sleep_quality, log_date)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(6.5 + (day % 3) as f64 * 0.5)
        .bind(3 + (day % 3) as i16)
        .bind(at.date_naive())
        .execute(pool)
        .await?;

        sqlx::query(
            "INSERT INTO moods (user_id, mood_rating, notes, entry_date) VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(2 + (day % 4) as i16)
        .bind((day % 2 == 0).then_some("Felt calm after a walk"))
        .bind(at)
        .execute(pool)
        .await?;
    }

    println!("[done] Created a week of self-care, mindfulness, sleep and mood records");
    Ok(())
}

async fn seed_tasks_and_journal(pool: &PgPool, user_id: Uuid) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Tasks already exist ({count})");
        return Ok(());
    }

    let tasks = [
        ("Drink eight glasses of water", true),
        ("Stretch for ten minutes", true),
        ("Call a friend", false),
    ];
    for (title, completed) in tasks {
        sqlx::query("INSERT INTO tasks (user_id, title, completed) VALUES ($1, $2, $3)")
            .bind(user_id)
            .bind(title)
            .bind(completed)
            .execute(pool)
            .await?;
    }

    let entries = [
        ("Morning pages", "Woke up early and wrote before checking my phone.", "calm"),
        ("Gratitude", "Three good things: sunshine, coffee, a long walk.", "happy"),
    ];
    for (title, content, mood) in entries {
        sqlx::query(
            "INSERT INTO journal_entries (user_id, title, content, mood) VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(title)
        .bind(content)
        .bind(mood)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} tasks and {} journal entries", tasks.len(), entries.len());
    Ok(())
}

async fn seed_habit(pool: &PgPool, user_id: Uuid) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM habits WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Habits already exist ({count})");
        return Ok(());
    }

    let habit_id: Uuid = sqlx::query_scalar(
        "INSERT INTO habits (user_id, name, description, category)
         VALUES ($1, 'Evening walk', '20 minutes outside after dinner', 'movement')
         RETURNING id",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    let today = Utc::now().date_naive();
    for day in [0i64, 1, 3] {
        sqlx::query(
            "INSERT INTO habit_completions (habit_id, user_id, completion_date)
             VALUES ($1, $2, $3)",
        )
        .bind(habit_id)
        .bind(user_id)
        .bind(today - Duration::days(day))
        .execute(pool)
        .await?;
    }

    println!("[done] Created a habit with three completions");
    Ok(())
}
