//! weekend_picker - pick the best Friday–Sunday weekend for a group
//!
//! Each person declares hard constraints (days they cannot attend) and soft
//! constraints (days they would rather avoid). Every weekend inside the
//! search window is scored against everyone's constraints and the weekends
//! are ranked, falling back to a relaxed policy when no weekend is free of
//! hard conflicts.
//!
//! The engine is two pure functions: [`generate_candidates`] and [`rank`].
//! Loading requests ([`request`]) and rendering results ([`report`]) sit
//! around it.

pub mod calendar;
pub mod candidates;
pub mod config;
pub mod constraints;
pub mod ranking;
pub mod report;
pub mod request;

pub use calendar::{DateRange, Weekend};
pub use candidates::generate_candidates;
pub use config::{OutputFormat, ReportConfig};
pub use constraints::{DateConstraint, ValidationError};
pub use ranking::{rank, PersonImpact, ScoredCandidate, SelectionMode};
pub use report::ResultPayload;
pub use request::{load_request, parse_request, InputError, Person, Request};
