//! Dispatch outcome and summary models
//!
//! Produced by a reminder run and discarded afterwards, unless the caller
//! writes them out as a report.

use serde::{Deserialize, Serialize};

/// Result of one send attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// Who the message was addressed to
    pub recipient_email: String,
    /// Recipient name, for manual follow-up
    pub recipient_name: String,
    /// Whether the sender accepted the message
    pub succeeded: bool,
    /// Sender error, present only on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DispatchOutcome {
    /// Outcome for an accepted message
    #[must_use]
    pub fn success(recipient_email: impl Into<String>, recipient_name: impl Into<String>) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            recipient_name: recipient_name.into(),
            succeeded: true,
            error: None,
        }
    }

    /// Outcome for a rejected message
    #[must_use]
    pub fn failure(
        recipient_email: impl Into<String>,
        recipient_name: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            recipient_name: recipient_name.into(),
            succeeded: false,
            error: Some(error.into()),
        }
    }
}

/// Aggregate result of a reminder run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSummary {
    /// Number of send attempts
    pub total: usize,
    /// Attempts the sender accepted
    pub succeeded: usize,
    /// Attempts the sender rejected
    pub failed: usize,
    /// One entry per attempt, in dispatch order
    pub outcomes: Vec<DispatchOutcome>,
}

impl DispatchSummary {
    /// Append an outcome and update the counters
    pub fn record(&mut self, outcome: DispatchOutcome) {
        self.total += 1;
        if outcome.succeeded {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    /// Outcomes that failed, for retrying by hand
    pub fn failures(&self) -> impl Iterator<Item = &DispatchOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded)
    }

    /// True when nothing failed
    #[must_use]
    pub const fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
