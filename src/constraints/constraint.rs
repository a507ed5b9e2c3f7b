//! Date constraints attached to a person.

use chrono::NaiveDate;

use super::ValidationError;
use crate::calendar::DateRange;

/// A single blocked or discouraged stretch of calendar days.
///
/// Closed set of shapes: extending it means adding a variant here and an arm
/// to [`DateConstraint::covers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateConstraint {
    /// One calendar day.
    Date(NaiveDate),
    /// Inclusive range of days, `start <= end`.
    Interval(DateRange),
}

impl DateConstraint {
    /// Builds an interval constraint, rejecting `start > end`.
    ///
    /// `field` is the path reported in the error.
    pub fn interval(
        start: NaiveDate,
        end: NaiveDate,
        field: &str,
    ) -> Result<Self, ValidationError> {
        DateRange::new(start, end)
            .map(Self::Interval)
            .ok_or_else(|| ValidationError::InvertedInterval {
                field: field.to_string(),
            })
    }

    /// Returns true if `day` falls under this constraint.
    pub fn covers(&self, day: NaiveDate) -> bool {
        match self {
            Self::Date(date) => *date == day,
            Self::Interval(range) => range.contains(day),
        }
    }

    /// The constraint as an inclusive range.
    pub fn range(&self) -> DateRange {
        match self {
            Self::Date(date) => DateRange::single(*date),
            Self::Interval(range) => *range,
        }
    }

    /// Short human-readable form, `date:YYYY-MM-DD` or `interval:A..B`.
    pub fn describe(&self) -> String {
        match self {
            Self::Date(date) => format!("date:{date}"),
            Self::Interval(range) => format!("interval:{range}"),
        }
    }
}

/// Returns true if any constraint in `constraints` covers `day`.
pub fn any_covers(constraints: &[DateConstraint], day: NaiveDate) -> bool {
    constraints.iter().any(|c| c.covers(day))
}
