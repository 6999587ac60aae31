//! Business logic services.

pub mod auth;
pub mod dashboard;
pub mod habit;
pub mod journal;
pub mod mindfulness;
pub mod mood;
pub mod selfcare;
pub mod sleep;
pub mod statistics;
pub mod task;
pub mod user;
