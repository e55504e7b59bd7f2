//! Tests for reminder dispatch

use rollcall::adapters::mail::DryRunSender;
use rollcall::core::models::{Message, RosterEntry, SurveyContext};
use rollcall::core::ports::{MessageSender, SendError};
use rollcall::core::services::{ReminderTemplate, dispatch_reminders, find_non_respondents};

use crate::common::mocks::MockSender;
use crate::common::{response, roster_abc};

fn survey() -> SurveyContext {
    SurveyContext::new("leadership course survey", "https://forms.example/lead")
}

fn pending_b_and_c() -> Vec<RosterEntry> {
    find_non_respondents(&roster_abc(), &[response("a@x.com")])
}

#[test]
fn test_failure_for_one_recipient_does_not_stop_the_next() {
    let template = ReminderTemplate::default();
    let survey = survey();
    let sender = MockSender::failing_for(&["b@x.com"]);

    let summary =
        dispatch_reminders(&pending_b_and_c(), |e| template.render(e, &survey), &sender);

    assert_eq!(summary.total, 2);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(sender.attempted(), vec!["b@x.com", "c@x.com"]);

    let failures: Vec<_> = summary.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].recipient_email, "b@x.com");
    assert_eq!(failures[0].recipient_name, "B");
    assert!(failures[0].error.as_deref().unwrap().contains("mailbox unavailable"));
}

#[test]
fn test_each_message_is_personalized_and_carries_the_link() {
    let template = ReminderTemplate::default();
    let survey = survey();
    let sender = MockSender::new();

    let summary =
        dispatch_reminders(&pending_b_and_c(), |e| template.render(e, &survey), &sender);
    assert!(summary.all_succeeded());

    let messages = sender.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].subject.contains('B'));
    assert!(messages[0].subject.contains("leadership course survey"));
    assert!(messages[1].body.contains("Hello C,"));
    for message in &messages {
        assert!(message.body.contains("https://forms.example/lead"));
    }
}

#[test]
fn test_always_failing_sender_records_every_error() {
    let sender = |_: &Message| -> Result<(), SendError> {
        Err(SendError::Build("bad header".to_string()))
    };
    let summary = dispatch_reminders(
        &roster_abc(),
        |e| Message::new(&e.email, "s", "b"),
        &sender,
    );

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 0);
    assert_eq!(summary.failed, 3);
    assert!(summary.outcomes.iter().all(|o| !o.succeeded && o.error.is_some()));
}

#[test]
fn test_blank_email_is_never_attempted() {
    let mut entries = pending_b_and_c();
    entries.insert(0, RosterEntry::new("Ghost", "Ops", " "));
    let sender = MockSender::new();

    let summary = dispatch_reminders(&entries, |e| Message::new(&e.email, "s", "b"), &sender);

    assert_eq!(summary.total, 2);
    assert_eq!(sender.attempted(), vec!["b@x.com", "c@x.com"]);
}

#[test]
fn test_dry_run_sender_keeps_messages_in_order() {
    let template = ReminderTemplate::default();
    let survey = survey();
    let sender = DryRunSender::new();

    let summary =
        dispatch_reminders(&pending_b_and_c(), |e| template.render(e, &survey), &sender);

    assert_eq!(summary.succeeded, 2);
    let sent = sender.sent();
    assert_eq!(sent[0].recipient, "b@x.com");
    assert_eq!(sent[1].recipient, "c@x.com");
}

#[test]
fn test_dispatch_through_trait_object() {
    let sender = MockSender::new();
    let dynamic: &dyn MessageSender = &sender;
    let summary = dispatch_reminders(&roster_abc(), |e| Message::new(&e.email, "s", "b"), dynamic);
    assert_eq!(summary.succeeded, 3);
}
