//! API handlers for the chalet booking REST endpoints

pub mod bookings;
pub mod gallery;
pub mod health;
pub mod openapi;
pub mod reservations;
pub mod stats;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::profile::{Identity, Role},
    AppState,
};

/// Extractor for the caller identity injected by the upstream auth
/// gateway. This service consumes the headers and never verifies
/// credentials itself.
pub struct AuthenticatedUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing x-user-id header".to_string()))?;

        let user_id: Uuid = user_id
            .parse()
            .map_err(|_| AppError::Authentication("Malformed x-user-id header".to_string()))?;

        let name = parts
            .headers
            .get("x-user-name")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing x-user-name header".to_string()))?
            .to_string();

        // Anything the gateway does not assert as admin is a guest
        let role = parts
            .headers
            .get("x-user-role")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<Role>().ok())
            .unwrap_or(Role::Guest);

        Ok(AuthenticatedUser(Identity {
            user_id,
            name,
            role,
        }))
    }
}
