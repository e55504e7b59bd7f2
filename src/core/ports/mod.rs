//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (files, spreadsheets, mail, language models).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. Tests swap in closures and in-memory fakes.

mod message_sender;
mod table_source;
mod text_generator;

pub use message_sender::{MessageSender, SendError};
pub use table_source::{LoadError, TableSource};
pub use text_generator::TextGenerator;
