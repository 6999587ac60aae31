//! User account and profile model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Full user row from database (includes password_hash — never serialize to API).
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country_timezone: Option<String>,
    pub languages: Option<String>,
    pub communication_preference: Option<String>,
    pub profile_visibility: Option<String>,
    pub allow_marketing: bool,
    pub mood_updates: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// "First Middle Last", skipping an absent or blank middle name.
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().map(str::trim) {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// User profile DTO — excludes password_hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country_timezone: Option<String>,
    pub languages: Option<String>,
    pub communication_preference: Option<String>,
    pub profile_visibility: Option<String>,
    pub allow_marketing: bool,
    pub mood_updates: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        let full_name = u.full_name();
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            middle_name: u.middle_name,
            last_name: u.last_name,
            full_name,
            date_of_birth: u.date_of_birth,
            gender: u.gender,
            phone: u.phone,
            emergency_contact: u.emergency_contact,
            address: u.address,
            city: u.city,
            state: u.state,
            zip: u.zip,
            country_timezone: u.country_timezone,
            languages: u.languages,
            communication_preference: u.communication_preference,
            profile_visibility: u.profile_visibility,
            allow_marketing: u.allow_marketing,
            mood_updates: u.mood_updates,
            created_at: u.created_at,
        }
    }
}

/// The twelve fields that make up profile completeness, as stored text.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct ProfileFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub address: Option<String>,
    pub country_timezone: Option<String>,
    pub languages: Option<String>,
    pub communication_preference: Option<String>,
    pub profile_visibility: Option<String>,
}

impl ProfileFields {
    pub const COUNT: usize = 12;

    pub fn values(&self) -> [Option<&str>; Self::COUNT] {
        [
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
            self.date_of_birth.as_deref(),
            self.gender.as_deref(),
            self.phone.as_deref(),
            self.emergency_contact.as_deref(),
            self.address.as_deref(),
            self.country_timezone.as_deref(),
            self.languages.as_deref(),
            self.communication_preference.as_deref(),
            self.profile_visibility.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 3, max = 50, message = "must be between 3 and 50 characters"))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "is required"))]
    pub first_name: String,
    pub middle_name: Option<String>,
    #[validate(length(min = 1, message = "is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "is required"))]
    pub phone: String,
}

impl RegisterUser {
    /// Copy with text fields trimmed and a blank middle name dropped. The password is kept as typed.
    pub fn normalized(&self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            middle_name: trimmed(&self.middle_name).filter(|m| !m.is_empty()),
            last_name: self.last_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

/// Partial profile update: absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct UpdateProfile {
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    #[serde(alias = "country")]
    pub country_timezone: Option<String>,
    pub languages: Option<String>,
    pub communication_preference: Option<String>,
    pub profile_visibility: Option<String>,
    pub allow_marketing: Option<bool>,
    pub mood_updates: Option<bool>,
}

impl UpdateProfile {
    /// Copy with surrounding whitespace removed from the identity fields.
    pub fn normalized(&self) -> Self {
        Self {
            email: trimmed(&self.email),
            first_name: trimmed(&self.first_name),
            last_name: trimmed(&self.last_name),
            ..self.clone()
        }
    }

    /// Names of required fields that were supplied but blank.
    pub fn blank_required_fields(&self) -> Vec<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEmail {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

impl UpdateEmail {
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
        }
    }
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_deref().map(|v| v.trim().to_string())
}
