//! Candidate comparison chains.
//!
//! Both chains end on the Friday date, which is unique per candidate, so the
//! resulting order is total.

use std::cmp::Ordering;

use super::candidate::ScoredCandidate;

/// Earlier Friday first.
pub fn compare_by_date(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    a.weekend().friday().cmp(&b.weekend().friday())
}

/// Soft-constraint chain: more fully feasible people, then fewer affected
/// people, then fewer soft-overlapped days, then earliest date.
pub fn compare_soft(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.fully_feasible_people_count()
        .cmp(&a.fully_feasible_people_count())
        .then_with(|| a.affected_people_count().cmp(&b.affected_people_count()))
        .then_with(|| a.total_soft_overlap_days().cmp(&b.total_soft_overlap_days()))
        .then_with(|| compare_by_date(a, b))
}

/// Ordering used when no weekend is free of hard overlaps: fewer
/// hard-affected people first, then the soft chain.
pub fn compare_fallback(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    a.hard_affected_people_count()
        .cmp(&b.hard_affected_people_count())
        .then_with(|| compare_soft(a, b))
}
