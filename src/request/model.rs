//! Validated engine input: people and the search window.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::calendar::DateRange;
use crate::constraints::{DateConstraint, ValidationError};

/// One participant and their date constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    hard_constraints: Vec<DateConstraint>,
    soft_constraints: Vec<DateConstraint>,
}

impl Person {
    /// Creates a person. Surrounding whitespace is stripped from `name`.
    pub fn new(
        name: impl AsRef<str>,
        hard_constraints: Vec<DateConstraint>,
        soft_constraints: Vec<DateConstraint>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            hard_constraints,
            soft_constraints,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dates on which this person cannot attend.
    pub fn hard_constraints(&self) -> &[DateConstraint] {
        &self.hard_constraints
    }

    /// Dates this person would rather avoid.
    pub fn soft_constraints(&self) -> &[DateConstraint] {
        &self.soft_constraints
    }
}

/// A complete, validated weekend-picking request.
///
/// Construction enforces `min_date <= max_date` and non-empty, unique person
/// names. Once built the request is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    window: DateRange,
    people: Vec<Person>,
}

impl Request {
    pub fn new(
        min_date: NaiveDate,
        max_date: NaiveDate,
        people: Vec<Person>,
    ) -> Result<Self, ValidationError> {
        let window = DateRange::new(min_date, max_date)
            .ok_or(ValidationError::InvertedRange { min_date, max_date })?;

        let mut seen = HashSet::with_capacity(people.len());
        for (index, person) in people.iter().enumerate() {
            if person.name().is_empty() {
                return Err(ValidationError::EmptyName {
                    field: format!("people[{index}].name"),
                });
            }
            if !seen.insert(person.name()) {
                return Err(ValidationError::DuplicateName(person.name().to_string()));
            }
        }

        Ok(Self { window, people })
    }

    pub fn min_date(&self) -> NaiveDate {
        self.window.start()
    }

    pub fn max_date(&self) -> NaiveDate {
        self.window.end()
    }

    /// The inclusive search window `[min_date, max_date]`.
    pub fn window(&self) -> DateRange {
        self.window
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }
}
