//! Structured, serializable ranking result.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::Weekend;
use crate::ranking::{Overlap, PersonImpact, ScoredCandidate, SelectionMode};
use crate::request::Request;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchWindow {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekendView {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: [NaiveDate; 3],
}

impl From<&Weekend> for WeekendView {
    fn from(weekend: &Weekend) -> Self {
        Self {
            start_date: weekend.friday(),
            end_date: weekend.sunday(),
            days: weekend.days(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    pub hard_affected_people_count: usize,
    pub fully_feasible_people_count: usize,
    pub affected_people_count: usize,
    pub total_soft_overlap_days: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardImpactView {
    pub name: String,
    pub overlapped_dates: Vec<NaiveDate>,
    pub matched_hard_constraints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoftImpactView {
    pub name: String,
    pub overlapped_dates: Vec<NaiveDate>,
    pub matched_soft_constraints: Vec<String>,
}

fn describe_all(overlap: &Overlap) -> Vec<String> {
    overlap.matched.iter().map(|c| c.describe()).collect()
}

impl HardImpactView {
    fn from_impact(impact: &PersonImpact) -> Self {
        Self {
            name: impact.person_name().to_string(),
            overlapped_dates: impact.hard().dates.clone(),
            matched_hard_constraints: describe_all(impact.hard()),
        }
    }
}

impl SoftImpactView {
    fn from_impact(impact: &PersonImpact) -> Self {
        Self {
            name: impact.person_name().to_string(),
            overlapped_dates: impact.soft().dates.clone(),
            matched_soft_constraints: describe_all(impact.soft()),
        }
    }
}

/// One reported option, 1-based `rank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedOption {
    pub rank: usize,
    pub selection_mode: SelectionMode,
    pub weekend: WeekendView,
    pub score: Score,
    pub hard_affected_people: Vec<HardImpactView>,
    pub affected_people: Vec<SoftImpactView>,
}

impl RankedOption {
    fn new(rank: usize, candidate: &ScoredCandidate) -> Self {
        let impacts = candidate.impacts();
        Self {
            rank,
            selection_mode: candidate.mode(),
            weekend: WeekendView::from(candidate.weekend()),
            score: Score {
                hard_affected_people_count: candidate.hard_affected_people_count(),
                fully_feasible_people_count: candidate.fully_feasible_people_count(),
                affected_people_count: candidate.affected_people_count(),
                total_soft_overlap_days: candidate.total_soft_overlap_days(),
            },
            hard_affected_people: impacts
                .iter()
                .filter(|i| i.hard_overlap())
                .map(HardImpactView::from_impact)
                .collect(),
            affected_people: impacts
                .iter()
                .filter(|i| i.soft_overlap_days() > 0)
                .map(SoftImpactView::from_impact)
                .collect(),
        }
    }
}

/// Full report: search window, participant count and the best options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPayload {
    pub search_window: SearchWindow,
    pub participant_count: usize,
    pub options: Vec<RankedOption>,
}

impl ResultPayload {
    /// Builds the report from the first `top_n` entries of `ranked`.
    pub fn build(request: &Request, ranked: &[ScoredCandidate], top_n: usize) -> Self {
        Self {
            search_window: SearchWindow {
                min_date: request.min_date(),
                max_date: request.max_date(),
            },
            participant_count: request.people().len(),
            options: ranked
                .iter()
                .take(top_n)
                .enumerate()
                .map(|(index, candidate)| RankedOption::new(index + 1, candidate))
                .collect(),
        }
    }

    /// Mode of the best option, if any.
    pub fn top_mode(&self) -> Option<SelectionMode> {
        self.options.first().map(|option| option.selection_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::generate_candidates;
    use crate::constraints::DateConstraint;
    use crate::ranking::rank;
    use crate::request::Person;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> (Request, Vec<ScoredCandidate>) {
        let people = vec![
            Person::new(
                "Ana",
                vec![DateConstraint::interval(d("2026-05-22"), d("2026-05-24"), "x").unwrap()],
                vec![DateConstraint::Date(d("2026-05-15"))],
            ),
            Person::new("Rui", vec![], vec![]),
        ];
        let req = Request::new(d("2026-05-01"), d("2026-06-30"), people).unwrap();
        let candidates = generate_candidates(req.min_date(), req.max_date());
        let ranked = rank(&req, &candidates);
        (req, ranked)
    }

    #[test]
    fn truncates_to_top_n_with_one_based_ranks() {
        let (req, ranked) = sample();
        let payload = ResultPayload::build(&req, &ranked, 3);
        assert_eq!(payload.options.len(), 3);
        let ranks: Vec<_> = payload.options.iter().map(|o| o.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(payload.participant_count, 2);
        assert_eq!(payload.top_mode(), Some(SelectionMode::StrictHard));
    }

    #[test]
    fn top_n_larger_than_ranking_keeps_everything() {
        let (req, ranked) = sample();
        let payload = ResultPayload::build(&req, &ranked, 100);
        assert_eq!(payload.options.len(), ranked.len());
        let last = payload.options.last().unwrap();
        assert_eq!(last.weekend.start_date, d("2026-05-15"));
        assert_eq!(last.affected_people.len(), 1);
        assert_eq!(last.affected_people[0].name, "Ana");
        assert_eq!(last.affected_people[0].overlapped_dates, vec![d("2026-05-15")]);
        assert_eq!(
            last.affected_people[0].matched_soft_constraints,
            vec!["date:2026-05-15".to_string()]
        );
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let (req, ranked) = sample();
        let payload = ResultPayload::build(&req, &ranked, 1);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["search_window"]["min_date"], "2026-05-01");
        assert_eq!(value["options"][0]["selection_mode"], "strict_hard");
        assert_eq!(value["options"][0]["weekend"]["start_date"], "2026-05-01");
        assert_eq!(value["options"][0]["weekend"]["days"][2], "2026-05-03");
        assert_eq!(value["options"][0]["score"]["fully_feasible_people_count"], 2);
        assert!(value["options"][0]["hard_affected_people"].as_array().unwrap().is_empty());
    }

    #[test]
    fn empty_ranking_has_no_options() {
        let req = Request::new(d("2026-05-01"), d("2026-05-02"), Vec::new()).unwrap();
        let payload = ResultPayload::build(&req, &[], 3);
        assert!(payload.options.is_empty());
        assert_eq!(payload.top_mode(), None);
    }
}
