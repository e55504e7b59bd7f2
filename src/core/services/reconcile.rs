//! Reconciliation service - who has not answered yet
//!
//! Email is the only join key. Entries with a blank email take part on
//! neither side.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::models::{ResponseEntry, RosterEntry};

/// How roster and response emails are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Byte-for-byte equality
    #[default]
    Exact,
    /// Trim and ASCII-lowercase both sides first
    Normalized,
}

impl MatchMode {
    fn key<'a>(self, email: &'a str) -> Cow<'a, str> {
        match self {
            Self::Exact => Cow::Borrowed(email),
            Self::Normalized => Cow::Owned(email.trim().to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Normalized => write!(f, "normalized"),
        }
    }
}

/// Roster entries whose email does not appear among the responses
///
/// Exact, case-sensitive matching. Roster order is preserved.
#[must_use]
pub fn find_non_respondents(
    roster: &[RosterEntry],
    responses: &[ResponseEntry],
) -> Vec<RosterEntry> {
    find_non_respondents_with(roster, responses, MatchMode::Exact)
}

/// Same as [`find_non_respondents`], with an explicit comparison mode
#[must_use]
pub fn find_non_respondents_with(
    roster: &[RosterEntry],
    responses: &[ResponseEntry],
    mode: MatchMode,
) -> Vec<RosterEntry> {
    let respondents: HashSet<_> = responses
        .iter()
        .filter(|r| r.has_email())
        .map(|r| mode.key(&r.email))
        .collect();

    roster
        .iter()
        .filter(|entry| entry.has_email() && !respondents.contains(&mode.key(&entry.email)))
        .cloned()
        .collect()
}
