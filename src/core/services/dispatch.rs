//! Dispatch service - send one reminder per non-respondent
//!
//! One attempt per recipient, in input order. A failed send is recorded
//! and the loop moves on.

use std::collections::HashSet;

use crate::core::models::{DispatchOutcome, DispatchSummary, Message, RosterEntry};
use crate::core::ports::MessageSender;

/// Build and send a reminder for each entry
///
/// Entries with a blank email are skipped and not counted, as are repeats
/// of an email already attempted in this call.
#[must_use]
pub fn dispatch_reminders<B, S>(
    non_respondents: &[RosterEntry],
    build: B,
    sender: &S,
) -> DispatchSummary
where
    B: Fn(&RosterEntry) -> Message,
    S: MessageSender + ?Sized,
{
    let mut summary = DispatchSummary::default();
    let mut attempted: HashSet<&str> = HashSet::new();

    for entry in non_respondents {
        if !entry.has_email() {
            log::debug!("Skipping '{}': no email address", entry.full_name);
            continue;
        }
        if !attempted.insert(entry.email.as_str()) {
            log::warn!(
                "Skipping '{}': {} was already attempted in this run",
                entry.full_name,
                entry.email
            );
            continue;
        }

        let message = build(entry);
        let outcome = match sender.send(&message) {
            Ok(()) => {
                log::info!("Reminder sent to {} <{}>", entry.full_name, entry.email);
                DispatchOutcome::success(&entry.email, &entry.full_name)
            },
            Err(err) => {
                log::warn!("Reminder to {} <{}> failed: {err}", entry.full_name, entry.email);
                DispatchOutcome::failure(&entry.email, &entry.full_name, err.to_string())
            },
        };
        summary.record(outcome);
    }

    log::debug!(
        "Dispatch finished: {} attempted, {} sent, {} failed",
        summary.total,
        summary.succeeded,
        summary.failed
    );
    summary
}
