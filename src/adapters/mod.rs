//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `table/` - CSV files and sheet URLs, plus typed row mapping
//! - `mail/` - SMTP and dry-run message senders
//! - `openai` - Chat completion client
//! - `response_log` - Append responses to a local CSV

pub mod mail;
pub mod openai;
pub mod response_log;
pub mod table;
