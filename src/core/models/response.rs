//! Response entry model
//!
//! One submitted survey answer, already mapped from a raw table row.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Rating;

/// A submitted survey response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseEntry {
    /// Respondent name as typed into the form
    pub full_name: String,
    /// Respondent affiliation as typed into the form
    pub affiliation: String,
    /// Respondent email, matched against the roster
    pub email: String,
    /// Satisfaction rating, if the survey asked for one and it parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// Free-form comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// When the response was submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDateTime>,
    /// Remaining answer columns, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<(String, String)>,
}

impl ResponseEntry {
    /// Create a response carrying only identity fields
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        affiliation: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            affiliation: affiliation.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Set the rating
    #[must_use]
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Add an extra answer column
    #[must_use]
    pub fn with_answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.push((question.into(), answer.into()));
        self
    }

    /// Whether this response has an email that can be matched
    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}
