use std::env;
use std::str::FromStr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_acquire_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_access_token_expiry_secs: i64,
    pub jwt_refresh_token_expiry_secs: i64,
    pub frontend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: var_or("DATABASE_MAX_CONNECTIONS", 10),
            database_acquire_timeout_secs: var_or("DATABASE_ACQUIRE_TIMEOUT_SECS", 5),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: var_or("BACKEND_PORT", 5000),
            jwt_secret: env::var("JWT_SECRET")?,
            // Sessions last 12 hours.
            jwt_access_token_expiry_secs: var_or("JWT_ACCESS_TOKEN_EXPIRY_SECS", 43_200),
            jwt_refresh_token_expiry_secs: var_or("JWT_REFRESH_TOKEN_EXPIRY_SECS", 604_800),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        })
    }
}

/// Read an optional numeric variable, falling back to `default` when unset or unparseable.
fn var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
