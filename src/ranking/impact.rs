//! Per-person evaluation of a single weekend.

use chrono::NaiveDate;

use crate::calendar::Weekend;
use crate::constraints::{any_covers, DateConstraint};
use crate::request::Person;

/// Weekend days hit by one list of constraints, and which constraints hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlap {
    /// Covered weekend days, ascending, each at most once.
    pub dates: Vec<NaiveDate>,
    /// Constraints covering at least one weekend day, in declared order.
    pub matched: Vec<DateConstraint>,
}

impl Overlap {
    fn compute(constraints: &[DateConstraint], weekend: &Weekend) -> Self {
        let dates = weekend
            .days()
            .into_iter()
            .filter(|day| any_covers(constraints, *day))
            .collect();
        let span = weekend.range();
        let matched = constraints
            .iter()
            .filter(|c| c.range().overlaps(&span))
            .copied()
            .collect();
        Self { dates, matched }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// How one weekend affects one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonImpact {
    pub(crate) person_name: String,
    pub(crate) hard: Overlap,
    pub(crate) soft: Overlap,
}

impl PersonImpact {
    pub fn person_name(&self) -> &str {
        &self.person_name
    }

    /// True if any weekend day falls under a hard constraint.
    pub fn hard_overlap(&self) -> bool {
        !self.hard.is_empty()
    }

    /// Number of weekend days (0..=3) under at least one soft constraint.
    pub fn soft_overlap_days(&self) -> usize {
        self.soft.dates.len()
    }

    /// No hard overlap and no soft overlap.
    pub fn is_fully_feasible(&self) -> bool {
        !self.hard_overlap() && self.soft_overlap_days() == 0
    }

    pub fn hard(&self) -> &Overlap {
        &self.hard
    }

    pub fn soft(&self) -> &Overlap {
        &self.soft
    }
}

/// Computes the impact of `weekend` on `person`.
pub fn evaluate(weekend: &Weekend, person: &Person) -> PersonImpact {
    PersonImpact {
        person_name: person.name().to_string(),
        hard: Overlap::compute(person.hard_constraints(), weekend),
        soft: Overlap::compute(person.soft_constraints(), weekend),
    }
}
