//! JSON request documents.
//!
//! The wire shape is deserialized into loosely typed raw records first and
//! then validated field by field so that every error can name its path.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use super::{InputError, Person, Request};
use crate::calendar::{parse_iso_date, DateRange};
use crate::constraints::{DateConstraint, ValidationError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequest {
    min_date: Option<Value>,
    max_date: Option<Value>,
    people: Option<Vec<RawPerson>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPerson {
    name: Option<String>,
    hard_constraints: Option<Vec<RawConstraint>>,
    soft_constraints: Option<Vec<RawConstraint>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConstraint {
    #[serde(rename = "type")]
    kind: Option<String>,
    date: Option<Value>,
    start_date: Option<Value>,
    end_date: Option<Value>,
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ValidationError> {
    value.as_deref().ok_or_else(|| ValidationError::MissingField {
        field: field.to_string(),
    })
}

/// Any JSON type is accepted here; only an ISO date string passes.
fn date_field(value: &Option<Value>, field: &str) -> Result<NaiveDate, ValidationError> {
    let raw = value.as_ref().ok_or_else(|| ValidationError::MissingField {
        field: field.to_string(),
    })?;
    let invalid = |value: String| ValidationError::InvalidDate {
        field: field.to_string(),
        value,
    };
    match raw {
        Value::String(text) => parse_iso_date(text).ok_or_else(|| invalid(text.clone())),
        other => Err(invalid(other.to_string())),
    }
}

impl RawConstraint {
    fn validate(&self, path: &str) -> Result<DateConstraint, ValidationError> {
        let kind = required(&self.kind, &format!("{path}.type"))?;
        match kind {
            "date" => date_field(&self.date, &format!("{path}.date")).map(DateConstraint::Date),
            "interval" => {
                let start = date_field(&self.start_date, &format!("{path}.start_date"))?;
                let end = date_field(&self.end_date, &format!("{path}.end_date"))?;
                DateConstraint::interval(start, end, path)
            }
            other => Err(ValidationError::UnknownConstraintType {
                field: format!("{path}.type"),
                value: other.to_string(),
            }),
        }
    }
}

fn validate_constraints(
    raw: &Option<Vec<RawConstraint>>,
    path: &str,
) -> Result<Vec<DateConstraint>, ValidationError> {
    raw.iter()
        .flatten()
        .enumerate()
        .map(|(index, constraint)| constraint.validate(&format!("{path}[{index}]")))
        .collect()
}

impl RawPerson {
    fn validate(&self, index: usize) -> Result<Person, ValidationError> {
        let path = format!("people[{index}]");
        let name = required(&self.name, &format!("{path}.name"))?;
        let hard = validate_constraints(&self.hard_constraints, &format!("{path}.hard_constraints"))?;
        let soft = validate_constraints(&self.soft_constraints, &format!("{path}.soft_constraints"))?;
        Ok(Person::new(name, hard, soft))
    }
}

impl RawRequest {
    fn validate(self) -> Result<Request, ValidationError> {
        let min_date = date_field(&self.min_date, "min_date")?;
        let max_date = date_field(&self.max_date, "max_date")?;
        if DateRange::new(min_date, max_date).is_none() {
            return Err(ValidationError::InvertedRange { min_date, max_date });
        }

        let raw_people = self.people.ok_or_else(|| ValidationError::MissingField {
            field: "people".to_string(),
        })?;
        let people = raw_people
            .iter()
            .enumerate()
            .map(|(index, person)| person.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        Request::new(min_date, max_date, people)
    }
}

/// Parses and validates a request from a JSON document.
pub fn parse_request(json: &str) -> Result<Request, InputError> {
    let raw: RawRequest = serde_json::from_str(json)?;
    let request = raw.validate()?;
    tracing::debug!(
        window = %request.window(),
        span_days = request.window().span_days(),
        people = request.people().len(),
        "parsed request"
    );
    Ok(request)
}

/// Reads and validates a request from a JSON file.
pub fn load_request(path: impl AsRef<Path>) -> Result<Request, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_request(&content)
}
