//! Stay pricing: nightly rate, extra-guest fees and the weekend minimum.

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::range::{DateRange, Stay};

/// Hard cap on pets per stay.
pub const MAX_PETS: i32 = 5;

/// Pricing rules, loaded once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct PricingRules {
    /// Nightly rate covering up to `base_guests` people.
    pub base_price: Decimal,
    pub base_guests: i32,
    /// Per night, per guest above `base_guests`.
    pub extra_person_fee: Decimal,
    pub max_guests: i32,
}

/// User-correctable booking rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("select at least one night")]
    InvalidInterval,

    #[error("weekend stays require at least 2 nights")]
    WeekendMinimum,

    #[error("guests must be between 1 and {max}")]
    GuestCount { max: i32 },

    #[error("pets must be between 0 and {max}")]
    PetCount { max: i32 },
}

/// Price breakdown for a candidate stay. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Quote {
    pub nights: i64,
    /// `nights * base_price`.
    pub base_total: Decimal,
    /// `max(0, guests - base_guests) * extra_person_fee * nights`.
    pub extra_total: Decimal,
    pub total: Decimal,
}

/// Price a complete stay.
///
/// The weekend scan walks `[check_in, check_out)` with the end excluded:
/// a Friday-to-Saturday single night visits only Friday and is therefore
/// not a weekend stay, while Saturday-to-Sunday is. The boundary is a
/// deliberate contract, pinned by tests below.
pub fn quote(stay: &Stay, guests: i32, rules: &PricingRules) -> Result<Quote, BookingError> {
    let nights = stay.nights();
    if nights < 1 {
        return Err(BookingError::InvalidInterval);
    }

    let has_weekend = stay
        .days()
        .any(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun));
    if has_weekend && nights < 2 {
        return Err(BookingError::WeekendMinimum);
    }

    let nights_dec = Decimal::from(nights);
    let extra_guests = (guests - rules.base_guests).max(0);
    let base_total = nights_dec * rules.base_price;
    let extra_total = Decimal::from(extra_guests) * rules.extra_person_fee * nights_dec;

    Ok(Quote {
        nights,
        base_total,
        extra_total,
        total: base_total + extra_total,
    })
}

/// Price a working selection: `None` while the range is incomplete,
/// otherwise the quote or the rule violation.
pub fn quote_range(
    range: &DateRange,
    guests: i32,
    rules: &PricingRules,
) -> Option<Result<Quote, BookingError>> {
    let start = range.start?;
    let end = range.end?;
    Some(match Stay::new(start, end) {
        Some(stay) => quote(&stay, guests, rules),
        None => Err(BookingError::InvalidInterval),
    })
}

/// `guests` must be in `[1, max_guests]`.
pub fn validate_guests(guests: i32, rules: &PricingRules) -> Result<(), BookingError> {
    if (1..=rules.max_guests).contains(&guests) {
        Ok(())
    } else {
        Err(BookingError::GuestCount {
            max: rules.max_guests,
        })
    }
}

/// `pets` must be in `[0, MAX_PETS]`.
pub fn validate_pets(pets: i32) -> Result<(), BookingError> {
    if (0..=MAX_PETS).contains(&pets) {
        Ok(())
    } else {
        Err(BookingError::PetCount { max: MAX_PETS })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn stay(a: NaiveDate, b: NaiveDate) -> Stay {
        Stay::new(a, b).unwrap()
    }

    fn rules() -> PricingRules {
        PricingRules {
            base_price: dec!(400),
            base_guests: 2,
            extra_person_fee: dec!(50),
            max_guests: 8,
        }
    }

    // 2026-03-02 is a Monday.
    fn monday() -> NaiveDate {
        d(2026, 3, 2)
    }

    #[test]
    fn test_single_weekday_night_is_valid() {
        // Mon -> Tue
        let q = quote(&stay(monday(), d(2026, 3, 3)), 2, &rules()).unwrap();
        assert_eq!(q.nights, 1);
        assert_eq!(q.total, dec!(400));
    }

    #[test]
    fn test_zero_nights_rejected() {
        let err = quote(&stay(monday(), monday()), 2, &rules()).unwrap_err();
        assert_eq!(err, BookingError::InvalidInterval);
    }

    #[test]
    fn test_weekend_stay_of_two_nights_is_valid() {
        // Fri -> Sun, includes Saturday
        let q = quote(&stay(d(2026, 3, 6), d(2026, 3, 8)), 2, &rules()).unwrap();
        assert_eq!(q.nights, 2);
        assert_eq!(q.total, dec!(800));
    }

    #[test]
    fn test_friday_to_saturday_is_not_a_weekend_stay() {
        // The exclusive-end scan visits only Friday, so checking out on
        // Saturday does not trigger the weekend minimum.
        let q = quote(&stay(d(2026, 3, 6), d(2026, 3, 7)), 2, &rules()).unwrap();
        assert_eq!(q.nights, 1);
    }

    #[test]
    fn test_saturday_to_sunday_violates_weekend_minimum() {
        let err = quote(&stay(d(2026, 3, 7), d(2026, 3, 8)), 2, &rules()).unwrap_err();
        assert_eq!(err, BookingError::WeekendMinimum);
    }

    #[test]
    fn test_base_guests_pay_no_extra_fee() {
        // 3 weekday nights at base occupancy
        let q = quote(&stay(monday(), d(2026, 3, 5)), 2, &rules()).unwrap();
        assert_eq!(q.nights, 3);
        assert_eq!(q.base_total, dec!(1200));
        assert_eq!(q.extra_total, dec!(0));
        assert_eq!(q.total, dec!(1200));
    }

    #[test]
    fn test_extra_guest_fee_scales_with_guests_and_nights() {
        // 5 guests, 2 of them included: 3 * 50 * 2 nights = 300
        let q = quote(&stay(monday(), d(2026, 3, 4)), 5, &rules()).unwrap();
        assert_eq!(q.base_total, dec!(800));
        assert_eq!(q.extra_total, dec!(300));
        assert_eq!(q.total, dec!(1100));
    }

    #[test]
    fn test_fewer_guests_than_base_still_pays_base() {
        let q = quote(&stay(monday(), d(2026, 3, 3)), 1, &rules()).unwrap();
        assert_eq!(q.extra_total, dec!(0));
        assert_eq!(q.total, dec!(400));
    }

    #[test]
    fn test_quote_is_pure() {
        let s = stay(monday(), d(2026, 3, 5));
        let a = quote(&s, 4, &rules()).unwrap();
        let b = quote(&s, 4, &rules()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_incomplete_range_yields_no_quote() {
        let partial = DateRange {
            start: Some(monday()),
            end: None,
        };
        assert!(quote_range(&partial, 2, &rules()).is_none());
        assert!(quote_range(&DateRange::empty(), 2, &rules()).is_none());
    }

    #[test]
    fn test_complete_range_yields_quote() {
        let range = DateRange {
            start: Some(monday()),
            end: Some(d(2026, 3, 5)),
        };
        let q = quote_range(&range, 2, &rules()).unwrap().unwrap();
        assert_eq!(q.nights, 3);
    }

    #[test]
    fn test_guest_bounds() {
        let r = rules();
        assert!(validate_guests(1, &r).is_ok());
        assert!(validate_guests(8, &r).is_ok());
        assert_eq!(
            validate_guests(0, &r).unwrap_err(),
            BookingError::GuestCount { max: 8 }
        );
        assert!(validate_guests(9, &r).is_err());
    }

    #[test]
    fn test_pet_bounds() {
        assert!(validate_pets(0).is_ok());
        assert!(validate_pets(5).is_ok());
        assert_eq!(
            validate_pets(6).unwrap_err(),
            BookingError::PetCount { max: 5 }
        );
        assert!(validate_pets(-1).is_err());
    }
}
