//! Gallery repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::gallery::{DisplayOrderUpdate, GalleryCategory, GalleryItem, MediaKind},
};

#[derive(Clone)]
pub struct GalleryRepository {
    pool: Pool<Postgres>,
}

impl GalleryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get gallery item by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<GalleryItem> {
        sqlx::query_as::<_, GalleryItem>("SELECT * FROM gallery_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Gallery item {} not found", id)))
    }

    /// All items in display order
    pub async fn list(&self) -> AppResult<Vec<GalleryItem>> {
        let items = sqlx::query_as::<_, GalleryItem>(
            "SELECT * FROM gallery_items ORDER BY display_order, created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Register a media URL
    pub async fn create(
        &self,
        kind: MediaKind,
        url: &str,
        category: GalleryCategory,
        description: Option<&str>,
    ) -> AppResult<GalleryItem> {
        let item = sqlx::query_as::<_, GalleryItem>(
            r#"
            INSERT INTO gallery_items (kind, url, category, description, display_order)
            VALUES ($1, $2, $3, $4,
                    (SELECT COALESCE(MAX(display_order), 0) + 1 FROM gallery_items))
            RETURNING *
            "#,
        )
        .bind(kind)
        .bind(url)
        .bind(category)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    /// Persist the merged metadata of an edited item
    pub async fn update(
        &self,
        id: Uuid,
        category: GalleryCategory,
        description: Option<&str>,
        display_order: i32,
    ) -> AppResult<GalleryItem> {
        sqlx::query_as::<_, GalleryItem>(
            r#"
            UPDATE gallery_items
            SET category = $2, description = $3, display_order = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(category)
        .bind(description)
        .bind(display_order)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Gallery item {} not found", id)))
    }

    /// Batch reorder in one transaction
    pub async fn update_orders(&self, updates: &[DisplayOrderUpdate]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        for update in updates {
            sqlx::query("UPDATE gallery_items SET display_order = $2 WHERE id = $1")
                .bind(update.id)
                .bind(update.display_order)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a gallery item
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Gallery item {} not found", id)));
        }
        Ok(())
    }
}
