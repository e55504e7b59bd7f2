//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::cell::RefCell;

use rollcall::core::models::Message;
use rollcall::core::ports::{MessageSender, SendError, TextGenerator};

/// Sender that records every attempt and fails for chosen recipients
pub struct MockSender {
    failing: Vec<String>,
    attempts: RefCell<Vec<Message>>,
}

impl MockSender {
    /// A sender that always succeeds
    pub fn new() -> Self {
        Self {
            failing: Vec::new(),
            attempts: RefCell::new(Vec::new()),
        }
    }

    /// A sender that fails for the given recipients
    pub fn failing_for(recipients: &[&str]) -> Self {
        Self {
            failing: recipients.iter().map(ToString::to_string).collect(),
            attempts: RefCell::new(Vec::new()),
        }
    }

    /// Recipients attempted, in order
    pub fn attempted(&self) -> Vec<String> {
        self.attempts.borrow().iter().map(|m| m.recipient.clone()).collect()
    }

    /// Every message attempted
    pub fn messages(&self) -> Vec<Message> {
        self.attempts.borrow().clone()
    }
}

impl Default for MockSender {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSender for MockSender {
    fn send(&self, message: &Message) -> Result<(), SendError> {
        self.attempts.borrow_mut().push(message.clone());
        if self.failing.contains(&message.recipient) {
            return Err(SendError::Transport(format!("mailbox unavailable: {}", message.recipient)));
        }
        Ok(())
    }
}

/// Text generator returning a canned reply and keeping the prompts it saw
pub struct MockGenerator {
    reply: String,
    prompts: RefCell<Vec<(String, String)>>,
}

impl MockGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// `(system, prompt)` pairs received
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.borrow().clone()
    }
}

impl TextGenerator for MockGenerator {
    fn complete(&self, system: &str, prompt: &str) -> anyhow::Result<String> {
        self.prompts.borrow_mut().push((system.to_string(), prompt.to_string()));
        Ok(self.reply.clone())
    }
}
