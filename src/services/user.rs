//! User profile service: lookup, partial update, and email change.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::user::{UpdateEmail, UpdateProfile, User};

/// Find a user by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<User, AppError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// Apply a partial profile update. Absent fields keep their stored value.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    input: &UpdateProfile,
) -> Result<User, AppError> {
    let input = input.normalized();
    let blank = input.blank_required_fields();
    if !blank.is_empty() {
        return Err(AppError::Validation(format!(
            "{} cannot be empty",
            blank.join(", ")
        )));
    }
    input.validate()?;

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET
            email = COALESCE($2, email),
            first_name = COALESCE($3, first_name),
            middle_name = COALESCE($4, middle_name),
            last_name = COALESCE($5, last_name),
            date_of_birth = COALESCE($6, date_of_birth),
            gender = COALESCE($7, gender),
            phone = COALESCE($8, phone),
            emergency_contact = COALESCE($9, emergency_contact),
            address = COALESCE($10, address),
            city = COALESCE($11, city),
            state = COALESCE($12, state),
            zip = COALESCE($13, zip),
            country_timezone = COALESCE($14, country_timezone),
            languages = COALESCE($15, languages),
            communication_preference = COALESCE($16, communication_preference),
            profile_visibility = COALESCE($17, profile_visibility),
            allow_marketing = COALESCE($18, allow_marketing),
            mood_updates = COALESCE($19, mood_updates),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&input.email)
    .bind(&input.first_name)
    .bind(&input.middle_name)
    .bind(&input.last_name)
    .bind(input.date_of_birth)
    .bind(&input.gender)
    .bind(&input.phone)
    .bind(&input.emergency_contact)
    .bind(&input.address)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.zip)
    .bind(&input.country_timezone)
    .bind(&input.languages)
    .bind(&input.communication_preference)
    .bind(&input.profile_visibility)
    .bind(input.allow_marketing)
    .bind(input.mood_updates)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::from_unique_violation(e, "This email is already in use"))?
    .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %id, "Updated user profile");
    Ok(user)
}

/// Change a user's email address.
pub async fn update_email(pool: &PgPool, id: Uuid, input: &UpdateEmail) -> Result<User, AppError> {
    let input = input.normalized();
    input.validate()?;

    sqlx::query_as::<_, User>(
        "UPDATE users SET email = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.email)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::from_unique_violation(e, "This email is already in use"))?
    .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
