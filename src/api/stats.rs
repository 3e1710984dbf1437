//! Admin statistics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{profile::Profile, reservation::Reservation, reservation::ReservationStatus},
};

use super::AuthenticatedUser;

/// Optional aggregate filters, mirroring the reservation list filters
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct StatsFilter {
    /// Check-in on or after this date
    pub from: Option<NaiveDate>,
    /// Check-in on or before this date
    pub to: Option<NaiveDate>,
    /// Restrict to this status
    pub status: Option<ReservationStatus>,
}

/// One month of the revenue series
#[derive(Serialize, ToSchema)]
pub struct MonthlyEntry {
    /// Check-in month, "YYYY-MM"
    pub month: String,
    pub revenue: Decimal,
    pub guests: i64,
}

/// Aggregate statistics response
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Total revenue, cancelled reservations excluded
    pub revenue: Decimal,
    /// Total guests hosted, cancelled reservations excluded
    pub guests: i64,
    /// Confirmed reservations
    pub active_reservations: i64,
    /// All reservations matching the filter
    pub total_reservations: i64,
    /// Registered profiles
    pub total_users: i64,
    /// Revenue and guests grouped by check-in month
    pub monthly: Vec<MonthlyEntry>,
}

/// Upcoming arrivals and recent past stays
#[derive(Serialize, ToSchema)]
pub struct GuestMovements {
    /// Confirmed reservations with check-in today or later, soonest first
    pub upcoming: Vec<Reservation>,
    /// Non-cancelled past stays, most recent checkout first
    pub recent: Vec<Reservation>,
}

/// Get aggregate booking statistics (admin only)
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "admin",
    params(StatsFilter),
    responses(
        (status = 200, description = "Aggregate statistics", body = StatsResponse),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Query(filter): Query<StatsFilter>,
) -> AppResult<Json<StatsResponse>> {
    identity.require_admin()?;

    let stats = state.services.stats.get_stats(&filter).await?;
    Ok(Json(stats))
}

/// Get upcoming and recent guest movements (admin only)
#[utoipa::path(
    get,
    path = "/admin/guests",
    tag = "admin",
    responses(
        (status = 200, description = "Guest movements", body = GuestMovements),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_guests(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> AppResult<Json<GuestMovements>> {
    identity.require_admin()?;

    let movements = state.services.stats.guest_movements().await?;
    Ok(Json(movements))
}

/// List registered user profiles (admin only)
#[utoipa::path(
    get,
    path = "/admin/profiles",
    tag = "admin",
    responses(
        (status = 200, description = "Registered profiles", body = Vec<Profile>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_profiles(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> AppResult<Json<Vec<Profile>>> {
    identity.require_admin()?;

    let profiles = state.services.stats.list_profiles().await?;
    Ok(Json(profiles))
}
