//! Repository layer for database operations

pub mod gallery;
pub mod profiles;
pub mod reservations;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub reservations: reservations::ReservationsRepository,
    pub profiles: profiles::ProfilesRepository,
    pub gallery: gallery::GalleryRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            reservations: reservations::ReservationsRepository::new(pool.clone()),
            profiles: profiles::ProfilesRepository::new(pool.clone()),
            gallery: gallery::GalleryRepository::new(pool.clone()),
            pool,
        }
    }
}
