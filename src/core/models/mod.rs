//! Domain models for rollcall
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RosterEntry`] - "This person should answer"
//! - [`ResponseEntry`] - "This person answered, like so"
//! - [`Rating`] - Five-level satisfaction scale
//! - [`Message`] - A reminder ready to send
//! - [`DispatchSummary`] - What happened when reminders went out
//! - [`Table`] - Untyped rows as loaded from a source

mod dispatch;
mod message;
mod rating;
mod response;
mod roster;
mod survey;
mod table;

pub use dispatch::{DispatchOutcome, DispatchSummary};
pub use message::Message;
pub use rating::{Rating, Sentiment};
pub use response::ResponseEntry;
pub use roster::RosterEntry;
pub use survey::{DraftQuestion, DraftRequest, QuestionKind, SurveyContext, SurveyDraft};
pub use table::Table;
