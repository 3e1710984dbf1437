//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, gallery, health, reservations, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chalet Booking API",
        version = "1.0.0",
        description = "Vacation rental booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Booking flow
        bookings::get_availability,
        bookings::create_quote,
        bookings::get_pricing,
        bookings::get_calendar,
        // Reservations
        reservations::create_reservation,
        reservations::get_reservation,
        reservations::get_user_reservations,
        reservations::update_reservation,
        reservations::cancel_reservation,
        reservations::set_reservation_status,
        reservations::delete_reservation,
        reservations::list_reservations,
        // Admin
        stats::get_stats,
        stats::get_guests,
        stats::get_profiles,
        // Gallery
        gallery::list_gallery,
        gallery::create_gallery_item,
        gallery::update_gallery_item,
        gallery::reorder_gallery,
        gallery::delete_gallery_item,
    ),
    components(
        schemas(
            // Booking flow
            bookings::AvailabilityResponse,
            bookings::QuoteRequest,
            bookings::PricingResponse,
            bookings::MonthResponse,
            crate::booking::Quote,
            crate::booking::calendar::DayCell,
            // Reservations
            crate::models::reservation::Reservation,
            crate::models::reservation::ReservationStatus,
            crate::models::reservation::CreateReservation,
            crate::models::reservation::UpdateReservation,
            crate::models::reservation::ReservationQuery,
            reservations::SetStatusRequest,
            // Admin
            stats::StatsResponse,
            stats::MonthlyEntry,
            stats::GuestMovements,
            crate::models::profile::Profile,
            crate::models::profile::Role,
            // Gallery
            crate::models::gallery::GalleryItem,
            crate::models::gallery::MediaKind,
            crate::models::gallery::GalleryCategory,
            crate::models::gallery::CreateGalleryItem,
            crate::models::gallery::UpdateGalleryItem,
            crate::models::gallery::DisplayOrderUpdate,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "booking", description = "Availability, quotes and the calendar"),
        (name = "reservations", description = "Reservation lifecycle"),
        (name = "admin", description = "Statistics and guest management"),
        (name = "gallery", description = "Gallery metadata management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
