//! Gallery service: media metadata management with input sanitization.
//!
//! Descriptions are HTML-escaped before storage to block stored XSS, and
//! media URLs must be https (plain http is tolerated for localhost only).

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        gallery::{CreateGalleryItem, DisplayOrderUpdate, GalleryItem, UpdateGalleryItem},
        profile::Identity,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct GalleryService {
    repository: Repository,
}

impl GalleryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Public listing in display order
    pub async fn list(&self) -> AppResult<Vec<GalleryItem>> {
        self.repository.gallery.list().await
    }

    /// Register an already-hosted media URL
    pub async fn create(
        &self,
        identity: &Identity,
        request: CreateGalleryItem,
    ) -> AppResult<GalleryItem> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !is_safe_url(&request.url) {
            return Err(AppError::Validation(
                "Media URL must use https (http is allowed for localhost only)".to_string(),
            ));
        }

        let description = request.description.as_deref().map(clean_text);
        let item = self
            .repository
            .gallery
            .create(
                request.kind,
                &request.url,
                request.category,
                description.as_deref(),
            )
            .await?;

        tracing::info!(item_id = %item.id, added_by = %identity.user_id, "Gallery item registered");
        Ok(item)
    }

    /// Update category, description or position of an item
    pub async fn update(
        &self,
        identity: &Identity,
        id: uuid::Uuid,
        request: UpdateGalleryItem,
    ) -> AppResult<GalleryItem> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let existing = self.repository.gallery.get_by_id(id).await?;

        let category = request.category.unwrap_or(existing.category);
        let description = match request.description {
            Some(ref text) => Some(clean_text(text)),
            None => existing.description,
        };
        let display_order = request.display_order.unwrap_or(existing.display_order);

        let updated = self
            .repository
            .gallery
            .update(id, category, description.as_deref(), display_order)
            .await?;

        tracing::info!(item_id = %id, updated_by = %identity.user_id, "Gallery item updated");
        Ok(updated)
    }

    /// Batch reorder in one transaction
    pub async fn reorder(
        &self,
        identity: &Identity,
        updates: Vec<DisplayOrderUpdate>,
    ) -> AppResult<()> {
        self.repository.gallery.update_orders(&updates).await?;
        tracing::info!(
            count = updates.len(),
            updated_by = %identity.user_id,
            "Gallery reordered"
        );
        Ok(())
    }

    /// Remove a gallery item (metadata only; the hosted file is untouched)
    pub async fn delete(&self, identity: &Identity, id: uuid::Uuid) -> AppResult<()> {
        self.repository.gallery.delete(id).await?;
        tracing::info!(item_id = %id, deleted_by = %identity.user_id, "Gallery item deleted");
        Ok(())
    }
}

/// Escape HTML-significant characters and trim surrounding whitespace.
fn clean_text(text: &str) -> String {
    text.trim()
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
}

/// Require https for any non-local host; http passes for localhost and
/// 127.0.0.1 only.
fn is_safe_url(url: &str) -> bool {
    if let Some(rest) = url.strip_prefix("http://") {
        let host = rest
            .split(|c| c == '/' || c == ':' || c == '?' || c == '#')
            .next()
            .unwrap_or("");
        return host == "localhost" || host == "127.0.0.1";
    }
    match url.strip_prefix("https://") {
        Some(rest) => !rest.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_escapes_html() {
        assert_eq!(
            clean_text("<script>alert(\"x\")</script>"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;&#x2F;script&gt;"
        );
        assert_eq!(clean_text("  cozy view  "), "cozy view");
    }

    #[test]
    fn test_https_urls_accepted() {
        assert!(is_safe_url("https://cdn.example.com/photo.jpg"));
        assert!(!is_safe_url("https://"));
    }

    #[test]
    fn test_http_only_for_localhost() {
        assert!(is_safe_url("http://localhost:3000/img.png"));
        assert!(is_safe_url("http://127.0.0.1/img.png"));
        assert!(!is_safe_url("http://example.com/img.png"));
        assert!(!is_safe_url("http://localhost.evil.com/img.png"));
    }

    #[test]
    fn test_other_schemes_rejected() {
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("ftp://example.com/file"));
        assert!(!is_safe_url(""));
    }
}
