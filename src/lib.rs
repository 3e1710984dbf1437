//! Chalet Booking Server
//!
//! A REST JSON API for a single-property vacation rental: date-range
//! availability, dynamic stay pricing, reservation management, admin
//! statistics and a media gallery manager.

use std::sync::Arc;

pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub pool: sqlx::PgPool,
}
