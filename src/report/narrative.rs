//! Optional prose summary of a ranking, produced by an external text service.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use super::ResultPayload;

pub const DEFAULT_NARRATIVE_MODEL: &str = "gpt-4.1-mini";
pub const OPENAI_RESPONSES_URL: &str = "https://api.openai.com/v1/responses";

const SYSTEM_PROMPT: &str = "You are a planning assistant. \
Summarize weekend options concisely and objectively. \
Always write in European Portuguese (Portugues de Portugal, pt-PT), \
using natural phrasing for Portugal.";

const USER_PROMPT: &str = "Using this deterministic ranking payload, produce a short \
structured summary with sections: Best Option, Why, and People Potentially Affected. \
Output must be in European Portuguese (pt-PT).";

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("OpenAI narrative requested but no API key was provided.")]
    MissingApiKey,

    #[error("OpenAI request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("OpenAI request failed: could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("OpenAI request succeeded but returned empty text.")]
    EmptyResponse,
}

/// Turns a ranking report into prose.
pub trait Narrator {
    fn narrate(&self, payload: &ResultPayload) -> Result<String, NarrativeError>;
}

/// Narrator backed by the OpenAI Responses API.
#[derive(Debug, Clone)]
pub struct OpenAiNarrator {
    api_key: String,
    model: String,
    endpoint: String,
    timeout: Duration,
}

impl OpenAiNarrator {
    /// Fails with [`NarrativeError::MissingApiKey`] when `api_key` is blank.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, NarrativeError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(NarrativeError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            model: model.into(),
            endpoint: OPENAI_RESPONSES_URL.to_string(),
            timeout: Duration::from_secs(60),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, payload: &ResultPayload) -> Result<serde_json::Value, NarrativeError> {
        let payload_json = serde_json::to_string(payload)?;
        Ok(json!({
            "model": self.model,
            "input": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": format!("{USER_PROMPT}\n\n{payload_json}")},
            ],
        }))
    }
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl ResponseBody {
    /// Concatenated `output_text` parts, trimmed.
    fn output_text(&self) -> String {
        self.output
            .iter()
            .flat_map(|item| &item.content)
            .filter(|part| part.kind == "output_text")
            .map(|part| part.text.as_str())
            .collect::<String>()
            .trim()
            .to_string()
    }
}

fn non_empty(text: String) -> Result<String, NarrativeError> {
    if text.is_empty() {
        Err(NarrativeError::EmptyResponse)
    } else {
        Ok(text)
    }
}

impl Narrator for OpenAiNarrator {
    fn narrate(&self, payload: &ResultPayload) -> Result<String, NarrativeError> {
        let body = self.request_body(payload)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        tracing::debug!(model = %self.model, endpoint = %self.endpoint, "requesting narrative");
        let response: ResponseBody = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;
        non_empty(response.output_text())
    }
}

/// Report section printed after the ranking.
pub fn narrative_section(
    narrator: &dyn Narrator,
    payload: &ResultPayload,
) -> Result<String, NarrativeError> {
    let text = narrator.narrate(payload)?;
    Ok(format!("\nOpenAI Narrative:\n\n{text}"))
}
