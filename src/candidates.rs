//! Candidate weekend generation.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::{DateRange, Weekend};

/// Enumerates every Friday–Sunday weekend lying fully inside
/// `[min_date, max_date]`, earliest first.
///
/// An inverted or too-short window yields no weekends.
pub fn generate_candidates(min_date: NaiveDate, max_date: NaiveDate) -> Vec<Weekend> {
    DateRange::new(min_date, max_date)
        .map(|window| weekends_in(&window))
        .unwrap_or_default()
}

/// Enumerates the weekends of `window`, earliest first.
pub fn weekends_in(window: &DateRange) -> Vec<Weekend> {
    let weekends: Vec<Weekend> = window
        .days()
        .filter(|day| day.weekday() == Weekday::Fri)
        .filter(|friday| window.offset_within(*friday, 2).is_some())
        .filter_map(Weekend::anchored_on)
        .collect();

    tracing::debug!(window = %window, count = weekends.len(), "generated weekend candidates");
    weekends
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn fridays(weekends: &[Weekend]) -> Vec<NaiveDate> {
        weekends.iter().map(Weekend::friday).collect()
    }

    #[test]
    fn may_and_june_2026() {
        let weekends = generate_candidates(d("2026-05-01"), d("2026-06-30"));
        assert_eq!(
            fridays(&weekends),
            vec![
                d("2026-05-01"),
                d("2026-05-08"),
                d("2026-05-15"),
                d("2026-05-22"),
                d("2026-05-29"),
                d("2026-06-05"),
                d("2026-06-12"),
                d("2026-06-19"),
                d("2026-06-26"),
            ]
        );
    }

    #[test]
    fn weekends_respect_day_relations_and_window() {
        let (min, max) = (d("2026-01-01"), d("2026-12-31"));
        let weekends = generate_candidates(min, max);
        assert_eq!(weekends.len(), 52);
        for w in &weekends {
            assert_eq!(w.friday().weekday(), Weekday::Fri);
            assert_eq!(w.saturday(), w.friday().succ_opt().unwrap());
            assert_eq!(w.sunday(), w.saturday().succ_opt().unwrap());
            assert!(min <= w.friday() && w.sunday() <= max);
        }
    }

    #[test]
    fn strictly_ascending_without_duplicates() {
        let weekends = generate_candidates(d("2025-11-03"), d("2026-03-29"));
        assert!(weekends.windows(2).all(|pair| pair[0].friday() < pair[1].friday()));
    }

    #[test]
    fn trailing_weekend_cut_by_max_date_is_dropped() {
        // 2026-06-26 is a Friday; its Sunday is 2026-06-28.
        let weekends = generate_candidates(d("2026-06-20"), d("2026-06-27"));
        assert!(weekends.is_empty());
        let weekends = generate_candidates(d("2026-06-20"), d("2026-06-28"));
        assert_eq!(fridays(&weekends), vec![d("2026-06-26")]);
    }

    #[test]
    fn leading_weekend_starting_before_min_date_is_dropped() {
        // Window starts on a Saturday.
        let weekends = generate_candidates(d("2026-05-02"), d("2026-05-10"));
        assert_eq!(fridays(&weekends), vec![d("2026-05-08")]);
    }

    #[test]
    fn exact_three_day_window() {
        let weekends = generate_candidates(d("2026-05-15"), d("2026-05-17"));
        assert_eq!(fridays(&weekends), vec![d("2026-05-15")]);
    }

    #[test]
    fn window_shorter_than_two_days_is_empty() {
        assert!(generate_candidates(d("2026-05-15"), d("2026-05-16")).is_empty());
        assert!(generate_candidates(d("2026-05-15"), d("2026-05-15")).is_empty());
    }

    #[test]
    fn inverted_window_is_empty() {
        assert!(generate_candidates(d("2026-05-31"), d("2026-05-01")).is_empty());
    }

    #[test]
    fn generation_is_restartable() {
        let a = generate_candidates(d("2026-05-01"), d("2026-06-30"));
        let b = generate_candidates(d("2026-05-01"), d("2026-06-30"));
        assert_eq!(a, b);
    }
}
