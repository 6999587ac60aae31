//! JWT authentication extractor for Axum handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::auth as auth_service;
use crate::AppState;

/// Authenticated user extracted from JWT Bearer token.
///
/// Use as an Axum extractor in handlers that require authentication:
/// ```ignore
/// async fn handler(current_user: CurrentUser) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl CurrentUser {
    /// Resolve a `{user_id}` path segment, allowing access only to the caller's own data.
    ///
    /// A malformed or nil id is a validation error; a well-formed id that is
    /// not the caller's is forbidden.
    pub fn authorize_user(&self, raw_user_id: &str) -> Result<Uuid, AppError> {
        let user_id = parse_user_id(raw_user_id)?;
        if user_id != self.id {
            return Err(AppError::Forbidden(
                "Cannot access another user's data".to_string(),
            ));
        }
        Ok(user_id)
    }
}

/// Parse a user id supplied by a client.
pub fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::Validation("user id is required".to_string()));
    }
    match raw.parse::<Uuid>() {
        Ok(id) if !id.is_nil() => Ok(id),
        _ => Err(AppError::Validation(format!("invalid user id '{raw}'"))),
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims = auth_service::validate_token(token, &state.config.jwt_secret)?;

        if claims.token_type != "access" {
            return Err(AppError::Unauthorized);
        }

        let user_id: Uuid = claims
            .user_id
            .parse()
            .map_err(|_| AppError::Unauthorized)?;

        Ok(CurrentUser {
            id: user_id,
            username: claims.sub,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller() -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            username: "caller".to_string(),
            email: "caller@example.com".to_string(),
        }
    }

    #[test]
    fn own_user_id_is_allowed() {
        let user = caller();
        assert_eq!(user.authorize_user(&user.id.to_string()).unwrap(), user.id);
    }

    #[test]
    fn other_user_id_is_forbidden() {
        let err = caller()
            .authorize_user(&Uuid::new_v4().to_string())
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn malformed_and_nil_ids_are_invalid() {
        for raw in ["", "  ", "42", "not-a-uuid", "00000000-0000-0000-0000-000000000000"] {
            assert!(
                matches!(parse_user_id(raw), Err(AppError::Validation(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
