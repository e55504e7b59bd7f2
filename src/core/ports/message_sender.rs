//! Message sender port
//!
//! Defines the sink reminders are handed to.

use thiserror::Error;

use crate::core::models::Message;

/// Why a message could not be sent
#[derive(Debug, Error)]
pub enum SendError {
    /// Recipient or sender address did not parse
    #[error("invalid address {address}: {reason}")]
    InvalidAddress {
        /// The offending address
        address: String,
        /// Parser complaint
        reason: String,
    },

    /// Message could not be assembled
    #[error("could not build message: {0}")]
    Build(String),

    /// Transport accepted the connection but rejected the message, or failed
    #[error("transport error: {0}")]
    Transport(String),
}

/// Sink that delivers one message per call
///
/// Implementations block until the message is accepted or rejected.
/// A closure `Fn(&Message) -> Result<(), SendError>` is also a sender.
pub trait MessageSender {
    /// Deliver a single message
    fn send(&self, message: &Message) -> Result<(), SendError>;
}

impl<F> MessageSender for F
where
    F: Fn(&Message) -> Result<(), SendError>,
{
    fn send(&self, message: &Message) -> Result<(), SendError> {
        self(message)
    }
}
