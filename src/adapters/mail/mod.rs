//! Message sender adapters
//!
//! - [`SmtpSender`] - Real delivery over SMTP
//! - [`DryRunSender`] - Log only, for previews and tests

mod dry_run;
mod smtp;

pub use dry_run::DryRunSender;
pub use smtp::SmtpSender;
