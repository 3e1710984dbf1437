//! Gallery metadata endpoints (no file transfer; media is hosted
//! externally)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::gallery::{CreateGalleryItem, DisplayOrderUpdate, GalleryItem, UpdateGalleryItem},
};

use super::AuthenticatedUser;

/// List gallery items in display order (public)
#[utoipa::path(
    get,
    path = "/gallery",
    tag = "gallery",
    responses(
        (status = 200, description = "Gallery items", body = Vec<GalleryItem>)
    )
)]
pub async fn list_gallery(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<GalleryItem>>> {
    let items = state.services.gallery.list().await?;
    Ok(Json(items))
}

/// Register an already-hosted media URL (admin only)
#[utoipa::path(
    post,
    path = "/gallery",
    tag = "gallery",
    request_body = CreateGalleryItem,
    responses(
        (status = 201, description = "Gallery item registered", body = GalleryItem),
        (status = 400, description = "Unsafe URL or invalid description"),
        (status = 403, description = "Admin only")
    )
)]
pub async fn create_gallery_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(request): Json<CreateGalleryItem>,
) -> AppResult<(StatusCode, Json<GalleryItem>)> {
    identity.require_admin()?;

    let item = state.services.gallery.create(&identity, request).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update gallery item metadata (admin only)
#[utoipa::path(
    put,
    path = "/gallery/{id}",
    tag = "gallery",
    params(
        ("id" = Uuid, Path, description = "Gallery item ID")
    ),
    request_body = UpdateGalleryItem,
    responses(
        (status = 200, description = "Updated gallery item", body = GalleryItem),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Gallery item not found")
    )
)]
pub async fn update_gallery_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateGalleryItem>,
) -> AppResult<Json<GalleryItem>> {
    identity.require_admin()?;

    let item = state.services.gallery.update(&identity, id, request).await?;
    Ok(Json(item))
}

/// Batch reorder gallery items (admin only)
#[utoipa::path(
    put,
    path = "/gallery/order",
    tag = "gallery",
    request_body = Vec<DisplayOrderUpdate>,
    responses(
        (status = 204, description = "Gallery reordered"),
        (status = 403, description = "Admin only")
    )
)]
pub async fn reorder_gallery(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Json(updates): Json<Vec<DisplayOrderUpdate>>,
) -> AppResult<StatusCode> {
    identity.require_admin()?;

    state.services.gallery.reorder(&identity, updates).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a gallery item (admin only)
#[utoipa::path(
    delete,
    path = "/gallery/{id}",
    tag = "gallery",
    params(
        ("id" = Uuid, Path, description = "Gallery item ID")
    ),
    responses(
        (status = 204, description = "Gallery item deleted"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Gallery item not found")
    )
)]
pub async fn delete_gallery_item(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    identity.require_admin()?;

    state.services.gallery.delete(&identity, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
