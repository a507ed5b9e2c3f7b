//! Weekend ranking under hard and soft constraints.
//!
//! Ranking runs in two independent phases:
//!
//! 1. **Strict** ([`StrictPhase`]): every weekend on which at least one person
//!    has a hard overlap is dropped. Survivors are ordered by
//!    [`ordering::compare_soft`]: most fully feasible people, fewest affected
//!    people, fewest soft-overlapped days, earliest Friday.
//! 2. **Fallback** ([`FallbackPhase`]): only runs when the strict phase admits
//!    nothing. Every weekend is kept and ordered by fewest hard-affected people
//!    first, then the same soft chain.
//!
//! Both phases are pure: the same request and candidates always produce the
//! same, identically ordered output.
//!
//! # Module Structure
//!
//! - [`impact`] - Per-person evaluation of one weekend
//! - [`candidate`] - Aggregated score of one weekend
//! - [`ordering`] - Comparison chains
//! - [`engine`] - Phase policies and the scoring loop

pub mod candidate;
pub mod engine;
pub mod impact;
pub mod ordering;


pub use candidate::{ScoredCandidate, SelectionMode};
pub use engine::{run_phase, FallbackPhase, RankingPhase, StrictPhase};
pub use impact::{evaluate, Overlap, PersonImpact};

use crate::calendar::Weekend;
use crate::request::Request;

/// Ranks `candidates` for `request`, best first.
///
/// Uses the strict phase when it admits at least one weekend and the fallback
/// phase otherwise. Empty only when `candidates` is empty.
pub fn rank(request: &Request, candidates: &[Weekend]) -> Vec<ScoredCandidate> {
    let strict = run_phase(&StrictPhase, request, candidates);
    if !strict.is_empty() || candidates.is_empty() {
        return strict;
    }

    tracing::debug!("no weekend free of hard overlaps, switching to fallback ranking");
    run_phase(&FallbackPhase, request, candidates)
}
