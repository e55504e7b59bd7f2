//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! Apart from the injected sender in [`dispatch`], these services have no
//! I/O dependencies.
//!
//! - [`reconcile`] - Find roster entries with no response
//! - [`dispatch`] - Send one reminder per non-respondent
//! - [`template`] - Render personalized reminders
//! - [`stats`] - Response rate and rating breakdown
//! - [`prompt`] - Prompts for the language-model helpers

pub mod dispatch;
pub mod prompt;
pub mod reconcile;
pub mod stats;
pub mod template;

pub use dispatch::dispatch_reminders;
pub use prompt::{PromptError, analysis_prompt, draft_prompt, parse_draft};
pub use reconcile::{MatchMode, find_non_respondents, find_non_respondents_with};
pub use stats::{
    AnswerDistribution, RatingBreakdown, RatingCount, ResponseRate, answer_distributions,
    rating_breakdown, response_rate,
};
pub use template::{ReminderTemplate, TemplateError};
