//! Outbound message model

use serde::{Deserialize, Serialize};

/// A fully formed message ready for a sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Recipient email address
    pub recipient: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl Message {
    /// Create a new message
    #[must_use]
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}
