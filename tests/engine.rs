mod common;

use weekend_picker::{generate_candidates, parse_request, rank, SelectionMode};

#[test]
fn public_pipeline_ranks_strict_candidates() {
    let request = parse_request(common::ANA_MAY_JUNE).expect("valid request");
    let candidates = generate_candidates(request.min_date(), request.max_date());
    assert_eq!(candidates.len(), 9);

    let ranked = rank(&request, &candidates);
    assert_eq!(ranked.len(), 8);
    assert!(ranked.iter().all(|c| c.mode() == SelectionMode::StrictHard));
    assert_eq!(ranked[0].fully_feasible_people_count(), 2);
}

#[test]
fn public_pipeline_falls_back_when_everything_is_blocked() {
    let request = parse_request(common::ALL_BLOCKED).expect("valid request");
    let candidates = generate_candidates(request.min_date(), request.max_date());
    let ranked = rank(&request, &candidates);

    assert_eq!(ranked.len(), candidates.len());
    assert!(ranked.iter().all(|c| c.mode() == SelectionMode::FallbackHard));
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].hard_affected_people_count() <= pair[1].hard_affected_people_count()));
}
