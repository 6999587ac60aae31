//! Self-care activity catalogue and the per-user completion log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SelfCareActivity {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
}

/// A logged activity joined with its catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SelfCareLogEntry {
    pub id: Uuid,
    pub activity_id: Uuid,
    pub name: String,
    pub category: String,
    pub notes: Option<String>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSelfCareActivity {
    pub activity_id: Uuid,
    pub notes: Option<String>,
}
