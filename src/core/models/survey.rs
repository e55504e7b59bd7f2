//! Survey context and drafted survey models

use serde::{Deserialize, Serialize};

/// Survey details substituted into reminder templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyContext {
    /// Survey title
    pub title: String,
    /// Link the recipient follows to answer
    pub link: String,
}

impl SurveyContext {
    /// Create a new survey context
    #[must_use]
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Kind of input a drafted question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Single-line text
    Text,
    /// Multi-line text
    Textarea,
    /// Pick exactly one option
    Radio,
    /// Pick any number of options
    Checkbox,
}

/// One drafted question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftQuestion {
    /// Input kind
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Question text
    pub question: String,
    /// Whether an answer is mandatory
    #[serde(default)]
    pub required: bool,
    /// Choices, for radio and checkbox questions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// A survey proposed by the language model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDraft {
    /// Survey title
    pub title: String,
    /// Short introduction shown above the questions
    #[serde(default)]
    pub description: String,
    /// Questions in display order
    pub questions: Vec<DraftQuestion>,
}

/// Inputs for drafting a survey
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftRequest {
    /// Who will answer the survey
    pub audience: String,
    /// What the survey should find out
    pub purpose: String,
    /// Items the survey must cover
    pub required_items: Vec<String>,
}
