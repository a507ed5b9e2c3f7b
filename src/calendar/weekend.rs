//! Friday–Sunday weekend value.

use std::fmt::Display;

use chrono::{Datelike, NaiveDate, Weekday};

use super::DateRange;

/// Three consecutive days starting on a Friday.
///
/// Only produced by candidate generation, so the Friday anchor and the
/// day-after relations always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weekend {
    friday: NaiveDate,
    saturday: NaiveDate,
    sunday: NaiveDate,
}

impl Weekend {
    /// Builds the weekend anchored on `friday`.
    ///
    /// Returns `None` if `friday` is not a Friday or the Sunday would
    /// overflow the representable calendar.
    pub(crate) fn anchored_on(friday: NaiveDate) -> Option<Self> {
        if friday.weekday() != Weekday::Fri {
            return None;
        }
        let saturday = friday.succ_opt()?;
        let sunday = saturday.succ_opt()?;
        Some(Self {
            friday,
            saturday,
            sunday,
        })
    }

    pub const fn friday(&self) -> NaiveDate {
        self.friday
    }

    pub const fn saturday(&self) -> NaiveDate {
        self.saturday
    }

    pub const fn sunday(&self) -> NaiveDate {
        self.sunday
    }

    /// Friday, Saturday and Sunday in order.
    pub const fn days(&self) -> [NaiveDate; 3] {
        [self.friday, self.saturday, self.sunday]
    }

    /// The weekend as an inclusive range `[friday, sunday]`.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.friday, self.sunday).unwrap_or(DateRange::single(self.friday))
    }
}

impl Display for Weekend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.friday, self.sunday)
    }
}
