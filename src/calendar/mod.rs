//! Calendar primitives: inclusive date ranges and Friday–Sunday weekends.
//!
//! Dates are plain [`chrono::NaiveDate`] values. No timezone is ever attached.

mod range;
mod weekend;

pub use range::DateRange;
pub use weekend::Weekend;

use chrono::NaiveDate;

/// Format accepted for every date in a request.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).ok()
}
