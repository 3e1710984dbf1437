//! Business logic services

pub mod bookings;
pub mod gallery;
pub mod stats;

use crate::{config::PricingConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub bookings: bookings::BookingsService,
    pub stats: stats::StatsService,
    pub gallery: gallery::GalleryService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, pricing: &PricingConfig) -> Self {
        Self {
            bookings: bookings::BookingsService::new(repository.clone(), pricing.rules()),
            stats: stats::StatsService::new(repository.clone()),
            gallery: gallery::GalleryService::new(repository),
        }
    }
}
