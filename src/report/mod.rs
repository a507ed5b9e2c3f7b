//! Rendering of ranked weekends for people and machines.

mod narrative;
mod payload;
mod text;

pub use payload::{
    HardImpactView, RankedOption, ResultPayload, Score, SearchWindow, SoftImpactView, WeekendView,
};
pub use narrative::{
    narrative_section, NarrativeError, Narrator, OpenAiNarrator, DEFAULT_NARRATIVE_MODEL,
    OPENAI_RESPONSES_URL,
};
pub use text::render_text;

use crate::config::OutputFormat;

/// Pretty-printed JSON form of the report.
pub fn render_json(payload: &ResultPayload) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

/// Renders `payload` in the requested format.
pub fn render(payload: &ResultPayload, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(payload)),
        OutputFormat::Json => render_json(payload),
    }
}
