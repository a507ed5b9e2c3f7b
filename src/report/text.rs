//! Plain-text rendering of a [`ResultPayload`].

use chrono::NaiveDate;

use super::payload::ResultPayload;
use crate::ranking::SelectionMode;

fn join_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(NaiveDate::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the report as human-readable lines.
pub fn render_text(payload: &ResultPayload) -> String {
    let window = &payload.search_window;
    let mut lines = vec![
        format!(
            "Search window: {} to {} ({} participants)",
            window.min_date, window.max_date, payload.participant_count
        ),
        String::new(),
    ];

    if payload.options.is_empty() {
        lines.push("No weekend candidates available in the selected date window.".to_string());
        return lines.join("\n");
    }

    if payload.top_mode() == Some(SelectionMode::FallbackHard) {
        lines.push(
            "Fallback mode enabled: no weekend satisfied all hard constraints. \
             Ranking now minimizes people affected by hard constraints first."
                .to_string(),
        );
        lines.push(String::new());
    }

    lines.push("Top weekend options:".to_string());
    for option in &payload.options {
        let score = &option.score;
        lines.push(format!(
            "- #{} {} -> {}: hard_affected_people={}, fully_feasible={}, affected_people={}, soft_overlap_days={}",
            option.rank,
            option.weekend.start_date,
            option.weekend.end_date,
            score.hard_affected_people_count,
            score.fully_feasible_people_count,
            score.affected_people_count,
            score.total_soft_overlap_days,
        ));

        if option.hard_affected_people.is_empty() {
            lines.push("  hard_affected_people: none".to_string());
        } else {
            lines.push("  hard_affected_people:".to_string());
            for person in &option.hard_affected_people {
                lines.push(format!(
                    "  - {}: dates=[{}] constraints=[{}]",
                    person.name,
                    join_dates(&person.overlapped_dates),
                    person.matched_hard_constraints.join(", "),
                ));
            }
        }

        if option.affected_people.is_empty() {
            lines.push("  affected_people: none".to_string());
        } else {
            lines.push("  affected_people:".to_string());
            for person in &option.affected_people {
                lines.push(format!(
                    "  - {}: dates=[{}] constraints=[{}]",
                    person.name,
                    join_dates(&person.overlapped_dates),
                    person.matched_soft_constraints.join(", "),
                ));
            }
        }
    }

    lines.join("\n")
}
