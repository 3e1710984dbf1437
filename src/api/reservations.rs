//! Reservation management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::reservation::{
        CreateReservation, Reservation, ReservationQuery, ReservationStatus, UpdateReservation,
    },
};

use super::AuthenticatedUser;

/// Admin status override request
#[derive(Deserialize, ToSchema)]
pub struct SetStatusRequest {
    pub status: ReservationStatus,
}

/// Book a stay
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    request_body = CreateReservation,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 401, description = "Missing identity"),
        (status = 409, description = "Dates unavailable"),
        (status = 422, description = "Booking rule violation")
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(request): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = state.services.bookings.create(&identity, request).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Get a reservation (owner or admin)
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "reservations",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation details", body = Reservation),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.services.bookings.get(&identity, id).await?;
    Ok(Json(reservation))
}

/// Get the reservations of one guest (self or admin), newest first
#[utoipa::path(
    get,
    path = "/users/{user_id}/reservations",
    tag = "reservations",
    params(
        ("user_id" = Uuid, Path, description = "Guest user ID")
    ),
    responses(
        (status = 200, description = "Guest's reservations", body = Vec<Reservation>),
        (status = 403, description = "Not the guest themselves")
    )
)]
pub async fn get_user_reservations(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state
        .services
        .bookings
        .list_for_user(&identity, user_id)
        .await?;
    Ok(Json(reservations))
}

/// Update a reservation (owner or admin)
#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = "reservations",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservation,
    responses(
        (status = 200, description = "Updated reservation", body = Reservation),
        (status = 403, description = "Not the owner"),
        (status = 409, description = "New dates unavailable"),
        (status = 422, description = "Booking rule violation")
    )
)]
pub async fn update_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReservation>,
) -> AppResult<Json<Reservation>> {
    let reservation = state
        .services
        .bookings
        .update(&identity, id, request)
        .await?;
    Ok(Json(reservation))
}

/// Cancel a reservation (owner or admin)
#[utoipa::path(
    post,
    path = "/reservations/{id}/cancel",
    tag = "reservations",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Cancelled reservation", body = Reservation),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn cancel_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.services.bookings.cancel(&identity, id).await?;
    Ok(Json(reservation))
}

/// Set any reservation status (admin only)
#[utoipa::path(
    put,
    path = "/reservations/{id}/status",
    tag = "reservations",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Updated reservation", body = Reservation),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn set_reservation_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<SetStatusRequest>,
) -> AppResult<Json<Reservation>> {
    identity.require_admin()?;

    let reservation = state
        .services
        .bookings
        .set_status(&identity, id, request.status)
        .await?;
    Ok(Json(reservation))
}

/// Hard delete a reservation (admin only; historical stays are protected)
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = "reservations",
    params(
        ("id" = Uuid, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 403, description = "Admin only"),
        (status = 422, description = "Historical reservation protected")
    )
)]
pub async fn delete_reservation(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    identity.require_admin()?;

    state.services.bookings.delete(&identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List reservations with filters (admin only)
#[utoipa::path(
    get,
    path = "/admin/reservations",
    tag = "reservations",
    params(ReservationQuery),
    responses(
        (status = 200, description = "Filtered reservations", body = Vec<Reservation>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn list_reservations(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Query(query): Query<ReservationQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    identity.require_admin()?;

    let reservations = state.services.bookings.list(&query).await?;
    Ok(Json(reservations))
}
