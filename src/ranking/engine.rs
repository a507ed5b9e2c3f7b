//! Ranking phases and the loop that applies them.

use std::cmp::Ordering;

use super::candidate::{ScoredCandidate, SelectionMode};
use super::impact::{evaluate, PersonImpact};
use super::ordering::{compare_fallback, compare_soft};
use crate::calendar::Weekend;
use crate::request::Request;

/// One ranking policy: which candidates it admits and how it orders them.
pub trait RankingPhase {
    /// Mode tag attached to every candidate this phase emits.
    const MODE: SelectionMode;

    /// Returns true if a weekend with these impacts may be ranked.
    fn admits(&self, impacts: &[PersonImpact]) -> bool;

    fn compare(&self, a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering;
}

/// Excludes every weekend on which anyone has a hard overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictPhase;

impl RankingPhase for StrictPhase {
    const MODE: SelectionMode = SelectionMode::StrictHard;

    fn admits(&self, impacts: &[PersonImpact]) -> bool {
        !impacts.iter().any(PersonImpact::hard_overlap)
    }

    fn compare(&self, a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
        compare_soft(a, b)
    }
}

/// Admits every weekend and minimizes hard-affected people first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackPhase;

impl RankingPhase for FallbackPhase {
    const MODE: SelectionMode = SelectionMode::FallbackHard;

    fn admits(&self, _impacts: &[PersonImpact]) -> bool {
        true
    }

    fn compare(&self, a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
        compare_fallback(a, b)
    }
}

/// Impacts of `weekend` on every person, in request order.
pub fn evaluate_weekend(request: &Request, weekend: &Weekend) -> Vec<PersonImpact> {
    request
        .people()
        .iter()
        .map(|person| evaluate(weekend, person))
        .collect()
}

/// Scores the admitted candidates under `phase` and sorts them.
pub fn run_phase<P: RankingPhase>(
    phase: &P,
    request: &Request,
    candidates: &[Weekend],
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .filter_map(|weekend| {
            let impacts = evaluate_weekend(request, weekend);
            phase
                .admits(&impacts)
                .then(|| ScoredCandidate::new(*weekend, P::MODE, impacts))
        })
        .collect();

    scored.sort_by(|a, b| phase.compare(a, b));

    let mode = P::MODE;
    tracing::debug!(
        mode = %mode,
        admitted = scored.len(),
        candidates = candidates.len(),
        "ranking phase finished"
    );
    scored
}
