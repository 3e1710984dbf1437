//! Data models for the chalet booking server

pub mod gallery;
pub mod profile;
pub mod reservation;

// Re-export commonly used types
pub use gallery::{GalleryCategory, GalleryItem, MediaKind};
pub use profile::{Identity, Profile, Role};
pub use reservation::{NewReservation, Reservation, ReservationStatus};
