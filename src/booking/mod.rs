//! Booking core: date-range selection, pricing rules and interval overlap.
//!
//! Pure, synchronous logic with no I/O. The repository layer re-states the
//! overlap predicate in SQL; this module is the single authoritative
//! definition of the algorithms.

pub mod calendar;
pub mod pricing;
pub mod range;

pub use calendar::{DateRangeSelector, Direction, SelectionState};
pub use pricing::{BookingError, PricingRules, Quote};
pub use range::{DateRange, Stay};
