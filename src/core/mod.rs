//! Core domain logic for rollcall
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RosterEntry`, `ResponseEntry`, `Message`, `DispatchSummary`)
//! - `services/` - Reconciliation, dispatch, templating, statistics, prompts
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
