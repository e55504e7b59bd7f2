//! Roster entry model
//!
//! One expected participant of a survey cycle.

use serde::{Deserialize, Serialize};

/// A participant expected to answer the survey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Display name used to personalize reminders
    pub full_name: String,
    /// Team or company the participant belongs to
    pub affiliation: String,
    /// Email address, the join key against responses
    pub email: String,
}

impl RosterEntry {
    /// Create a new roster entry
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
        }
    }

    /// Whether this entry has an email that can be matched or notified
    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}
