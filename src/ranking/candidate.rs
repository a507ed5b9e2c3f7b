//! Scored weekend candidate.

use std::fmt::Display;

use serde::Serialize;

use super::impact::PersonImpact;
use crate::calendar::Weekend;

/// Ranking policy a candidate was scored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Weekends with any hard overlap are excluded.
    StrictHard,
    /// Hard overlaps are tolerated and minimized.
    FallbackHard,
}

impl SelectionMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StrictHard => "strict_hard",
            Self::FallbackHard => "fallback_hard",
        }
    }
}

impl Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weekend together with its aggregate score across all people.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub(crate) weekend: Weekend,
    pub(crate) mode: SelectionMode,
    pub(crate) fully_feasible_people_count: usize,
    pub(crate) affected_people_count: usize,
    pub(crate) total_soft_overlap_days: usize,
    pub(crate) hard_affected_people_count: usize,
    pub(crate) hard_affected: Vec<String>,
    pub(crate) soft_affected: Vec<String>,
    pub(crate) impacts: Vec<PersonImpact>,
}

impl ScoredCandidate {
    /// Aggregates per-person impacts for `weekend`.
    ///
    /// A person with a hard overlap never counts as fully feasible. People
    /// untouched by any constraint are not kept in [`Self::impacts`].
    pub fn new(weekend: Weekend, mode: SelectionMode, impacts: Vec<PersonImpact>) -> Self {
        let fully_feasible_people_count = impacts.iter().filter(|i| i.is_fully_feasible()).count();
        let total_soft_overlap_days = impacts.iter().map(PersonImpact::soft_overlap_days).sum();

        let hard_affected: Vec<String> = impacts
            .iter()
            .filter(|i| i.hard_overlap())
            .map(|i| i.person_name().to_string())
            .collect();
        let soft_affected: Vec<String> = impacts
            .iter()
            .filter(|i| i.soft_overlap_days() > 0)
            .map(|i| i.person_name().to_string())
            .collect();

        let impacts = impacts
            .into_iter()
            .filter(|i| i.hard_overlap() || i.soft_overlap_days() > 0)
            .collect();

        Self {
            weekend,
            mode,
            fully_feasible_people_count,
            affected_people_count: soft_affected.len(),
            total_soft_overlap_days,
            hard_affected_people_count: hard_affected.len(),
            hard_affected,
            soft_affected,
            impacts,
        }
    }

    pub fn weekend(&self) -> &Weekend {
        &self.weekend
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// People with neither hard nor soft overlap.
    pub fn fully_feasible_people_count(&self) -> usize {
        self.fully_feasible_people_count
    }

    /// People with at least one soft-overlapped day.
    pub fn affected_people_count(&self) -> usize {
        self.affected_people_count
    }

    pub fn total_soft_overlap_days(&self) -> usize {
        self.total_soft_overlap_days
    }

    pub fn hard_affected_people_count(&self) -> usize {
        self.hard_affected_people_count
    }

    /// Names of people with a hard overlap, in request order.
    pub fn hard_affected(&self) -> &[String] {
        &self.hard_affected
    }

    /// Names of people with a soft overlap, in request order.
    pub fn soft_affected(&self) -> &[String] {
        &self.soft_affected
    }

    /// Impacts of every person touched by a hard or soft constraint.
    pub fn impacts(&self) -> &[PersonImpact] {
        &self.impacts
    }
}
