//! Date intervals for stays.
//!
//! A `DateRange` is the selector's working state and may be incomplete.
//! A `Stay` is a complete, ordered check-in/check-out pair; all date
//! arithmetic (nights, overlap) is defined on stays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A possibly incomplete date selection.
///
/// Both endpoints absent = nothing selected; only `start` = first click of
/// the two-click protocol; both present = complete selection with
/// `start <= end` maintained by [`crate::booking::DateRangeSelector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Both endpoints set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Materialize into a `Stay` if both endpoints are set.
    pub fn to_stay(&self) -> Option<Stay> {
        match (self.start, self.end) {
            (Some(check_in), Some(check_out)) => Stay::new(check_in, check_out),
            _ => None,
        }
    }
}

/// A complete stay with `check_in <= check_out` guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl Stay {
    /// Create a stay. Returns `None` if the dates are inverted.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Option<Self> {
        if check_in <= check_out {
            Some(Self { check_in, check_out })
        } else {
            None
        }
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights, i.e. whole days between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Iterate the stayed days: every day in `[check_in, check_out)`.
    /// The checkout day is not a stayed day.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let check_out = self.check_out;
        self.check_in
            .iter_days()
            .take_while(move |d| *d < check_out)
    }

    /// Whether `day` lies within `[check_in, check_out)`.
    pub fn occupies(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day < self.check_out
    }

    /// Half-open interval overlap: `[a, b)` and `[c, d)` intersect iff
    /// `a < d && c < b`. Adjacent stays sharing an endpoint do not overlap,
    /// so the checkout day is immediately re-bookable.
    pub fn overlaps(&self, other: &Stay) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn stay(a: NaiveDate, b: NaiveDate) -> Stay {
        Stay::new(a, b).unwrap()
    }

    #[test]
    fn test_inverted_dates_rejected() {
        assert!(Stay::new(d(2026, 3, 10), d(2026, 3, 5)).is_none());
    }

    #[test]
    fn test_nights() {
        assert_eq!(stay(d(2026, 3, 2), d(2026, 3, 3)).nights(), 1);
        assert_eq!(stay(d(2026, 3, 2), d(2026, 3, 9)).nights(), 7);
        assert_eq!(stay(d(2026, 3, 2), d(2026, 3, 2)).nights(), 0);
    }

    #[test]
    fn test_days_excludes_checkout() {
        let days: Vec<_> = stay(d(2026, 3, 2), d(2026, 3, 5)).days().collect();
        assert_eq!(days, vec![d(2026, 3, 2), d(2026, 3, 3), d(2026, 3, 4)]);
    }

    #[test]
    fn test_overlap_symmetric() {
        let a = stay(d(2026, 3, 2), d(2026, 3, 6));
        let b = stay(d(2026, 3, 4), d(2026, 3, 8));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = stay(d(2026, 3, 10), d(2026, 3, 12));
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_adjacent_stays_do_not_overlap() {
        // checkout(a) == checkin(b): the checkout day is re-bookable
        let a = stay(d(2026, 3, 2), d(2026, 3, 6));
        let b = stay(d(2026, 3, 6), d(2026, 3, 9));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contained_stay_overlaps() {
        let outer = stay(d(2026, 3, 1), d(2026, 3, 30));
        let inner = stay(d(2026, 3, 10), d(2026, 3, 12));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_occupies_half_open() {
        let s = stay(d(2026, 3, 2), d(2026, 3, 5));
        assert!(s.occupies(d(2026, 3, 2)));
        assert!(s.occupies(d(2026, 3, 4)));
        assert!(!s.occupies(d(2026, 3, 5)));
    }

    #[test]
    fn test_range_to_stay() {
        let range = DateRange {
            start: Some(d(2026, 3, 2)),
            end: Some(d(2026, 3, 5)),
        };
        assert_eq!(range.to_stay(), Stay::new(d(2026, 3, 2), d(2026, 3, 5)));
        assert!(DateRange::empty().to_stay().is_none());
    }
}
