//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing rollcall components.

pub mod mocks;

use rollcall::core::models::{Rating, ResponseEntry, RosterEntry};

/// Roster of three: A (Sales), B (Legal), C (R&D)
pub fn roster_abc() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new("A", "Sales", "a@x.com"),
        RosterEntry::new("B", "Legal", "b@x.com"),
        RosterEntry::new("C", "R&D", "c@x.com"),
    ]
}

/// A response carrying only an email
pub fn response(email: &str) -> ResponseEntry {
    ResponseEntry::new("", "", email)
}

/// A rated response
pub fn rated(email: &str, rating: Rating) -> ResponseEntry {
    ResponseEntry::new("", "", email).with_rating(rating)
}
