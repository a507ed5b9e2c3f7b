//! Inclusive calendar-date range.

use std::fmt::Display;

use chrono::{Days, NaiveDate};

/// Closed range `[start, end]` of calendar dates.
///
/// Used both for the search window of a request and for interval
/// constraints. A range always satisfies `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates range `[start, end]`.
    ///
    /// Returns `None` if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Range covering a single day.
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of whole days between `start` and `end` (zero for a single day).
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Returns true if `day` ∈ `[start, end]`.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Checks if this range shares at least one day with another range.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Iterates every day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Returns `day + offset` if it still lies inside the range.
    pub fn offset_within(&self, day: NaiveDate, offset: u64) -> Option<NaiveDate> {
        day.checked_add_days(Days::new(offset))
            .filter(|shifted| self.contains(*shifted))
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(d(start), d(end)).unwrap()
    }

    #[test]
    fn test_range_creation() {
        let r = range("2026-05-01", "2026-05-31");
        assert_eq!(r.start(), d("2026-05-01"));
        assert_eq!(r.end(), d("2026-05-31"));
        assert_eq!(r.span_days(), 30);
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(DateRange::new(d("2026-05-02"), d("2026-05-01")).is_none());
    }

    #[test]
    fn test_single_day_range() {
        let r = DateRange::single(d("2026-05-15"));
        assert_eq!(r.span_days(), 0);
        assert!(r.contains(d("2026-05-15")));
        assert!(!r.contains(d("2026-05-16")));
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let r = range("2026-05-22", "2026-05-24");
        assert!(r.contains(d("2026-05-22")));
        assert!(r.contains(d("2026-05-23")));
        assert!(r.contains(d("2026-05-24")));
        assert!(!r.contains(d("2026-05-21")));
        assert!(!r.contains(d("2026-05-25")));
    }

    #[test]
    fn test_range_overlaps() {
        let a = range("2026-05-01", "2026-05-10");
        let b = range("2026-05-10", "2026-05-20");
        let c = range("2026-05-11", "2026-05-20");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_days_iterates_inclusively() {
        let days: Vec<_> = range("2026-02-27", "2026-03-02").days().collect();
        assert_eq!(
            days,
            vec![
                d("2026-02-27"),
                d("2026-02-28"),
                d("2026-03-01"),
                d("2026-03-02")
            ]
        );
    }

    #[test]
    fn test_offset_within() {
        let r = range("2026-05-01", "2026-05-03");
        assert_eq!(r.offset_within(d("2026-05-01"), 2), Some(d("2026-05-03")));
        assert_eq!(r.offset_within(d("2026-05-02"), 2), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(range("2026-05-22", "2026-05-24").to_string(), "2026-05-22..2026-05-24");
    }
}
