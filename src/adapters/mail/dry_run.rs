//! Dry-run sender
//!
//! Logs each reminder and keeps it in memory instead of sending.

use std::cell::RefCell;

use crate::core::models::Message;
use crate::core::ports::{MessageSender, SendError};

/// Sender that never touches the network
#[derive(Debug, Default)]
pub struct DryRunSender {
    sent: RefCell<Vec<Message>>,
}

impl DryRunSender {
    /// Create an empty dry-run sender
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages "sent" so far, in order
    #[must_use]
    pub fn sent(&self) -> Vec<Message> {
        self.sent.borrow().clone()
    }
}

impl MessageSender for DryRunSender {
    fn send(&self, message: &Message) -> Result<(), SendError> {
        log::info!("[dry-run] Would send '{}' to {}", message.subject, message.recipient);
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}
