//! Route definitions for the wellness API.

pub mod auth;
pub mod dashboard;
pub mod habits;
pub mod health;
pub mod journal;
pub mod mindfulness;
pub mod moods;
pub mod selfcare;
pub mod sleep;
pub mod tasks;
pub mod users;

use axum::http::HeaderValue;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the full application router with middleware layers applied.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.frontend_url);

    let auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me));

    let user_routes = Router::new()
        .route("/users/{user_id}", get(users::get).put(users::update))
        .route("/users/{user_id}/email", put(users::update_email))
        .route("/users/{user_id}/dashboard", get(dashboard::snapshot))
        .route("/users/{user_id}/statistics", get(dashboard::user_statistics));

    let task_routes = Router::new()
        .route(
            "/users/{user_id}/tasks",
            get(tasks::list).post(tasks::create),
        )
        .route("/tasks/{id}", put(tasks::update).delete(tasks::delete));

    let journal_routes = Router::new()
        .route(
            "/users/{user_id}/journal",
            get(journal::list).post(journal::create),
        )
        .route(
            "/journal/{id}",
            put(journal::update).delete(journal::delete),
        );

    let tracking_routes = Router::new()
        .route(
            "/users/{user_id}/sleep-logs",
            get(sleep::list).post(sleep::create),
        )
        .route(
            "/users/{user_id}/mindfulness-sessions",
            get(mindfulness::list).post(mindfulness::create),
        )
        .route(
            "/users/{user_id}/moods",
            get(moods::list).post(moods::create),
        )
        .route("/selfcare/activities", get(selfcare::activities))
        .route(
            "/users/{user_id}/selfcare/log",
            get(selfcare::list_log).post(selfcare::log_activity),
        );

    let habit_routes = Router::new()
        .route(
            "/users/{user_id}/habits",
            get(habits::list).post(habits::create),
        )
        .route("/habits/{id}", put(habits::update).delete(habits::delete))
        .route("/habits/{id}/completions", post(habits::complete));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest(
            "/api/v1",
            auth_routes
                .merge(user_routes)
                .merge(task_routes)
                .merge(journal_routes)
                .merge(tracking_routes)
                .merge(habit_routes),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Allow the configured frontend origin; fall back to any origin if it is not a valid header value.
fn cors_layer(frontend_url: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::warn!(frontend_url, error = %e, "Invalid FRONTEND_URL, allowing any origin");
            layer.allow_origin(Any)
        }
    }
}
