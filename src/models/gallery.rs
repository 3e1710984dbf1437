//! Gallery item model: metadata for already-hosted media

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Media type of a gallery entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(format!("Invalid media kind: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for MediaKind {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for MediaKind {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for MediaKind {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Gallery section a media item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Exterior,
    Interior,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Exterior => "exterior",
            GalleryCategory::Interior => "interior",
        }
    }
}

impl std::str::FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exterior" => Ok(GalleryCategory::Exterior),
            "interior" => Ok(GalleryCategory::Interior),
            _ => Err(format!("Invalid gallery category: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for GalleryCategory {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for GalleryCategory {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for GalleryCategory {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Persisted gallery item
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct GalleryItem {
    pub id: Uuid,
    pub kind: MediaKind,
    pub url: String,
    pub category: GalleryCategory,
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Register an already-hosted media URL
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGalleryItem {
    pub kind: MediaKind,
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: String,
    pub category: GalleryCategory,
    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,
}

/// Update gallery item metadata
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGalleryItem {
    pub category: Option<GalleryCategory>,
    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

/// One entry of a batch reorder
#[derive(Debug, Deserialize, ToSchema)]
pub struct DisplayOrderUpdate {
    pub id: Uuid,
    pub display_order: i32,
}
