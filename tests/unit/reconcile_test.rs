//! Tests for reconciliation: who has not answered yet

use rollcall::core::models::RosterEntry;
use rollcall::core::services::{MatchMode, find_non_respondents, find_non_respondents_with};

use crate::common::{response, roster_abc};

fn emails(entries: &[RosterEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.email.as_str()).collect()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_one_response_leaves_the_other_two() {
    let pending = find_non_respondents(&roster_abc(), &[response("a@x.com")]);
    assert_eq!(emails(&pending), vec!["b@x.com", "c@x.com"]);
    assert_eq!(pending[0].full_name, "B");
    assert_eq!(pending[0].affiliation, "Legal");
}

#[test]
fn test_everyone_answered() {
    let responses: Vec<_> = ["c@x.com", "a@x.com", "b@x.com"].map(response).into();
    assert!(find_non_respondents(&roster_abc(), &responses).is_empty());
}

#[test]
fn test_no_responses_returns_whole_roster() {
    let pending = find_non_respondents(&roster_abc(), &[]);
    assert_eq!(pending, roster_abc());
}

#[test]
fn test_empty_roster() {
    assert!(find_non_respondents(&[], &[response("a@x.com")]).is_empty());
}

#[test]
fn test_unknown_respondent_is_ignored() {
    let pending = find_non_respondents(&roster_abc(), &[response("zed@x.com")]);
    assert_eq!(pending.len(), 3);
}

#[test]
fn test_duplicate_responses_count_once() {
    let responses = vec![response("a@x.com"), response("a@x.com")];
    let pending = find_non_respondents(&roster_abc(), &responses);
    assert_eq!(emails(&pending), vec!["b@x.com", "c@x.com"]);
}

// =============================================================================
// BLANK EMAILS
// =============================================================================

#[test]
fn test_blank_roster_email_is_never_pending() {
    let mut roster = roster_abc();
    roster.insert(1, RosterEntry::new("Nobody", "Ops", ""));
    roster.push(RosterEntry::new("Spaces", "Ops", "   "));

    let pending = find_non_respondents(&roster, &[]);
    assert_eq!(emails(&pending), vec!["a@x.com", "b@x.com", "c@x.com"]);
}

#[test]
fn test_blank_response_email_matches_nothing() {
    let mut roster = roster_abc();
    roster.push(RosterEntry::new("Nobody", "Ops", ""));

    let pending = find_non_respondents(&roster, &[response("")]);
    assert_eq!(pending.len(), 3);
}

// =============================================================================
// MATCH MODES
// =============================================================================

#[test]
fn test_exact_mode_is_case_sensitive() {
    let pending = find_non_respondents(&roster_abc(), &[response("A@X.COM")]);
    assert_eq!(pending.len(), 3);
}

#[test]
fn test_exact_mode_does_not_trim() {
    let pending = find_non_respondents(&roster_abc(), &[response(" a@x.com ")]);
    assert_eq!(pending.len(), 3);
}

#[test]
fn test_normalized_mode_ignores_case_and_whitespace() {
    let responses = vec![response(" A@X.com"), response("b@x.COM  ")];
    let pending = find_non_respondents_with(&roster_abc(), &responses, MatchMode::Normalized);
    assert_eq!(emails(&pending), vec!["c@x.com"]);
}

#[test]
fn test_default_mode_is_exact() {
    assert_eq!(MatchMode::default(), MatchMode::Exact);
    assert_eq!(MatchMode::Normalized.to_string(), "normalized");
}
