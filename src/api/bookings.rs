//! Booking flow endpoints: availability, quotes, pricing rules and the
//! calendar month grid

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{booking::calendar::DayCell, booking::Quote, error::AppResult};

/// Availability query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// Candidate check-in date (YYYY-MM-DD)
    pub check_in: NaiveDate,
    /// Candidate check-out date (YYYY-MM-DD)
    pub check_out: NaiveDate,
    /// Reservation to ignore, for edit-in-place
    pub exclude: Option<Uuid>,
}

/// Availability response
#[derive(Serialize, ToSchema)]
pub struct AvailabilityResponse {
    /// No non-cancelled reservation overlaps the candidate interval
    pub available: bool,
}

/// Quote request
#[derive(Deserialize, ToSchema)]
pub struct QuoteRequest {
    /// Check-in date (YYYY-MM-DD)
    pub check_in: NaiveDate,
    /// Check-out date (YYYY-MM-DD)
    pub check_out: NaiveDate,
    pub guests: i32,
}

/// Active pricing rules
#[derive(Serialize, ToSchema)]
pub struct PricingResponse {
    /// Nightly rate covering up to `base_guests` people
    pub base_price: i64,
    pub base_guests: i32,
    /// Per night, per guest above `base_guests`
    pub extra_person_fee: i64,
    pub max_guests: i32,
    pub max_pets: i32,
}

/// Calendar month response
#[derive(Serialize, ToSchema)]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayCell>,
}

/// Check whether a date interval is free
#[utoipa::path(
    get,
    path = "/availability",
    tag = "booking",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Availability of the candidate interval", body = AvailabilityResponse),
        (status = 400, description = "Malformed or inverted dates")
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let available = state
        .services
        .bookings
        .check_availability(query.check_in, query.check_out, query.exclude)
        .await?;

    Ok(Json(AvailabilityResponse { available }))
}

/// Price a candidate stay
#[utoipa::path(
    post,
    path = "/quotes",
    tag = "booking",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Price breakdown", body = Quote),
        (status = 422, description = "Booking rule violation")
    )
)]
pub async fn create_quote(
    State(state): State<crate::AppState>,
    Json(request): Json<QuoteRequest>,
) -> AppResult<Json<Quote>> {
    let quote = state
        .services
        .bookings
        .quote(request.check_in, request.check_out, request.guests)?;

    Ok(Json(quote))
}

/// Get the active pricing rules
#[utoipa::path(
    get,
    path = "/pricing",
    tag = "booking",
    responses(
        (status = 200, description = "Pricing rules", body = PricingResponse)
    )
)]
pub async fn get_pricing(
    State(state): State<crate::AppState>,
) -> Json<PricingResponse> {
    let pricing = &state.config.pricing;
    Json(PricingResponse {
        base_price: pricing.base_price,
        base_guests: pricing.base_guests,
        extra_person_fee: pricing.extra_person_fee,
        max_guests: pricing.max_guests,
        max_pets: crate::booking::pricing::MAX_PETS,
    })
}

/// Get the booking calendar grid for one month
#[utoipa::path(
    get,
    path = "/calendar/{year}/{month}",
    tag = "booking",
    params(
        ("year" = i32, Path, description = "Calendar year"),
        ("month" = u32, Path, description = "Calendar month (1-12)")
    ),
    responses(
        (status = 200, description = "Per-day past/booked flags", body = MonthResponse),
        (status = 400, description = "Invalid month")
    )
)]
pub async fn get_calendar(
    State(state): State<crate::AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> AppResult<Json<MonthResponse>> {
    let days = state.services.bookings.month_grid(year, month).await?;
    Ok(Json(MonthResponse { year, month, days }))
}
