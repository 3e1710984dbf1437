//! Calendar date-range selector.
//!
//! An explicit state machine behind the booking calendar: two clicks pick a
//! check-in and a check-out date, month navigation is independent of the
//! selection, and past days are unselectable. `today` is injected at
//! construction so the machine stays pure and testable.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use super::range::{DateRange, Stay};

/// Month navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Progress of the two-click selection protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    StartOnly,
    Complete,
}

/// Interactive calendar state: a displayed month plus a working selection.
#[derive(Debug, Clone)]
pub struct DateRangeSelector {
    /// First day of the displayed month. Navigation only, never affects
    /// the selection.
    view: NaiveDate,
    range: DateRange,
    today: NaiveDate,
}

impl DateRangeSelector {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_range(today, DateRange::empty())
    }

    /// Reopen the selector with a prior selection; the view starts on the
    /// selection's check-in month when one exists.
    pub fn with_range(today: NaiveDate, range: DateRange) -> Self {
        let anchor = range.start.unwrap_or(today);
        Self {
            view: first_of_month(anchor),
            range,
            today,
        }
    }

    pub fn view(&self) -> NaiveDate {
        self.view
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn state(&self) -> SelectionState {
        match (self.range.start, self.range.end) {
            (None, _) => SelectionState::Empty,
            (Some(_), None) => SelectionState::StartOnly,
            (Some(_), Some(_)) => SelectionState::Complete,
        }
    }

    /// Shift the displayed month. No effect on the selection.
    pub fn navigate(&mut self, direction: Direction) {
        let shifted = match direction {
            Direction::Prev => self.view.checked_sub_months(Months::new(1)),
            Direction::Next => self.view.checked_add_months(Months::new(1)),
        };
        if let Some(view) = shifted {
            self.view = view;
        }
    }

    /// Handle a day click. Past days are silent no-ops; a click on an empty
    /// or complete selection starts a new one; a click before the pending
    /// start restarts; otherwise the click completes the range.
    pub fn select(&mut self, date: NaiveDate) -> DateRange {
        if date < self.today {
            return self.range;
        }

        self.range = match (self.range.start, self.range.end) {
            (None, _) | (Some(_), Some(_)) => DateRange {
                start: Some(date),
                end: None,
            },
            (Some(start), None) if date < start => DateRange {
                start: Some(date),
                end: None,
            },
            (Some(start), None) => DateRange {
                start: Some(start),
                end: Some(date),
            },
        };

        self.range
    }

    /// Emit the completed stay, or `None` while the selection is incomplete.
    pub fn confirm(&self) -> Option<Stay> {
        self.range.to_stay()
    }

    /// Day is before today and therefore disabled.
    pub fn is_past(&self, day: NaiveDate) -> bool {
        day < self.today
    }

    /// Day is one of the two selected endpoints.
    pub fn is_endpoint(&self, day: NaiveDate) -> bool {
        self.range.start == Some(day) || self.range.end == Some(day)
    }

    /// Day lies strictly between the endpoints (`start < day < end`);
    /// endpoints themselves are reported by [`Self::is_endpoint`].
    pub fn is_in_range(&self, day: NaiveDate) -> bool {
        match (self.range.start, self.range.end) {
            (Some(start), Some(end)) => start < day && day < end,
            _ => false,
        }
    }
}

/// One day of a rendered month grid.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DayCell {
    /// Calendar date of the cell.
    pub date: NaiveDate,
    /// Day is before today (unselectable).
    pub past: bool,
    /// Day falls in some reserved `[check_in, check_out)` interval.
    pub booked: bool,
}

/// Build the grid for a calendar month, marking past and booked days.
/// Returns `None` for an invalid year/month.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    reserved: &[Stay],
) -> Option<Vec<DayCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let grid = first
        .iter_days()
        .take_while(|d| d.month() == month && d.year() == year)
        .map(|date| DayCell {
            date,
            past: date < today,
            booked: reserved.iter().any(|s| s.occupies(date)),
        })
        .collect();
    Some(grid)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn today() -> NaiveDate {
        d(2026, 3, 15)
    }

    #[test]
    fn test_starts_empty() {
        let selector = DateRangeSelector::new(today());
        assert_eq!(selector.state(), SelectionState::Empty);
        assert!(selector.confirm().is_none());
    }

    #[test]
    fn test_two_clicks_complete_a_range() {
        let mut selector = DateRangeSelector::new(today());
        selector.select(d(2026, 3, 20));
        assert_eq!(selector.state(), SelectionState::StartOnly);
        assert!(selector.confirm().is_none());

        selector.select(d(2026, 3, 23));
        assert_eq!(selector.state(), SelectionState::Complete);

        let stay = selector.confirm().unwrap();
        assert_eq!(stay.check_in(), d(2026, 3, 20));
        assert_eq!(stay.check_out(), d(2026, 3, 23));
    }

    #[test]
    fn test_past_click_is_ignored() {
        let mut selector = DateRangeSelector::new(today());
        selector.select(d(2026, 3, 10));
        assert_eq!(selector.state(), SelectionState::Empty);

        // today itself is selectable
        selector.select(today());
        assert_eq!(selector.state(), SelectionState::StartOnly);
    }

    #[test]
    fn test_click_before_start_restarts() {
        let mut selector = DateRangeSelector::new(today());
        selector.select(d(2026, 3, 25));
        selector.select(d(2026, 3, 20));
        assert_eq!(selector.state(), SelectionState::StartOnly);
        assert_eq!(selector.range().start, Some(d(2026, 3, 20)));
        assert_eq!(selector.range().end, None);
    }

    #[test]
    fn test_same_day_click_completes_zero_night_range() {
        // second click on the start date is not "before start", so it
        // completes the range; pricing rejects the zero-night stay later
        let mut selector = DateRangeSelector::new(today());
        selector.select(d(2026, 3, 20));
        selector.select(d(2026, 3, 20));
        assert_eq!(selector.state(), SelectionState::Complete);
        assert_eq!(selector.confirm().unwrap().nights(), 0);
    }

    #[test]
    fn test_click_after_complete_starts_over() {
        let mut selector = DateRangeSelector::new(today());
        selector.select(d(2026, 3, 20));
        selector.select(d(2026, 3, 23));
        selector.select(d(2026, 3, 27));
        assert_eq!(selector.state(), SelectionState::StartOnly);
        assert_eq!(selector.range().start, Some(d(2026, 3, 27)));
    }

    #[test]
    fn test_navigation_does_not_touch_selection() {
        let mut selector = DateRangeSelector::new(today());
        selector.select(d(2026, 3, 20));
        selector.navigate(Direction::Next);
        selector.navigate(Direction::Next);
        assert_eq!(selector.view(), d(2026, 5, 1));
        assert_eq!(selector.range().start, Some(d(2026, 3, 20)));

        selector.navigate(Direction::Prev);
        assert_eq!(selector.view(), d(2026, 4, 1));
    }

    #[test]
    fn test_view_opens_on_selection_month() {
        let range = DateRange {
            start: Some(d(2026, 6, 10)),
            end: None,
        };
        let selector = DateRangeSelector::with_range(today(), range);
        assert_eq!(selector.view(), d(2026, 6, 1));
    }

    #[test]
    fn test_in_range_is_strictly_between_endpoints() {
        let mut selector = DateRangeSelector::new(today());
        selector.select(d(2026, 3, 20));
        selector.select(d(2026, 3, 23));

        assert!(selector.is_endpoint(d(2026, 3, 20)));
        assert!(selector.is_endpoint(d(2026, 3, 23)));
        assert!(!selector.is_in_range(d(2026, 3, 20)));
        assert!(!selector.is_in_range(d(2026, 3, 23)));
        assert!(selector.is_in_range(d(2026, 3, 21)));
        assert!(selector.is_in_range(d(2026, 3, 22)));
    }

    #[test]
    fn test_month_grid_marks_past_and_booked() {
        let reserved = vec![Stay::new(d(2026, 3, 20), d(2026, 3, 23)).unwrap()];
        let grid = month_grid(2026, 3, today(), &reserved).unwrap();
        assert_eq!(grid.len(), 31);

        let cell = |day: u32| &grid[(day - 1) as usize];
        assert!(cell(10).past);
        assert!(!cell(15).past);
        assert!(cell(20).booked);
        assert!(cell(22).booked);
        // checkout day is free again
        assert!(!cell(23).booked);
    }

    #[test]
    fn test_month_grid_rejects_invalid_month() {
        assert!(month_grid(2026, 13, today(), &[]).is_none());
    }
}
