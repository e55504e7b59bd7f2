//! Prompt building for the language-model helpers
//!
//! The completion call itself is a port; this module only turns tables
//! and requests into prompt text and parses what comes back.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::models::{DraftRequest, SurveyDraft, Table};

/// System instruction for result analysis
pub const ANALYSIS_SYSTEM: &str =
    "You are an analyst who summarizes training survey results for program managers.";

/// System instruction for survey drafting
pub const DRAFT_SYSTEM: &str = "You are a helpful assistant that creates survey questions.";

static TIMESTAMP_COLUMN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)timestamp|date|time|시간|날짜|일시").expect("timestamp column regex is valid")
});

static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[A-Za-z]*\s*\n(.*?)\n?\s*```").expect("code fence regex is valid")
});

/// Errors reading a model reply
#[derive(Debug, Error)]
pub enum PromptError {
    /// Model reply was not the requested JSON shape
    #[error("model reply is not a valid survey draft: {0}")]
    InvalidDraft(#[from] serde_json::Error),
}

/// Indexes of columns that only carry submission times
#[must_use]
pub fn timestamp_columns(table: &Table) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| TIMESTAMP_COLUMN_RE.is_match(h))
        .map(|(i, _)| i)
        .collect()
}

/// Prompt asking for a summary of survey results
#[must_use]
pub fn analysis_prompt(responses: &Table) -> String {
    let data = responses.without_columns(&timestamp_columns(responses));
    format!(
        "Please analyze the following survey results:\n\n{}\n\n\
         Cover these points in your analysis:\n\
         1. Main trends\n\
         2. Notable observations\n\
         3. Suggestions for improvement",
        data.to_text()
    )
}

/// Prompt asking for a survey draft in a fixed JSON shape
#[must_use]
pub fn draft_prompt(request: &DraftRequest) -> String {
    let required = if request.required_items.is_empty() {
        "(none)".to_string()
    } else {
        request.required_items.join(", ")
    };

    format!(
        r#"Create survey questions that meet these conditions:

Audience: {audience}
Purpose: {purpose}
Required items: {required}

Reply with JSON only, in exactly this shape:
{{
    "title": "survey title",
    "description": "survey description",
    "questions": [
        {{
            "type": "text | textarea | radio | checkbox",
            "question": "question text",
            "required": true,
            "options": ["option 1", "option 2"]
        }}
    ]
}}
Include "options" only for radio and checkbox questions."#,
        audience = request.audience,
        purpose = request.purpose,
    )
}

/// Parse a drafted survey out of a model reply
///
/// Accepts bare JSON, JSON wrapped in a Markdown code fence, or JSON with
/// chatter around it.
pub fn parse_draft(reply: &str) -> Result<SurveyDraft, PromptError> {
    let json = CODE_FENCE_RE.captures(reply).and_then(|c| c.get(1)).map_or_else(
        || match (reply.find('{'), reply.rfind('}')) {
            (Some(start), Some(end)) if start < end => &reply[start..=end],
            _ => reply,
        },
        |m| m.as_str(),
    );
    Ok(serde_json::from_str(json.trim())?)
}
