//! Reminder templates
//!
//! Subject and body strings with `{placeholder}` fields. The body must
//! carry `{link}` so every reminder tells the recipient where to answer.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::core::models::{Message, RosterEntry, SurveyContext};

/// Placeholders a template may use
pub const PLACEHOLDERS: [&str; 5] = ["name", "affiliation", "email", "title", "link"];

/// Default subject line
pub const DEFAULT_SUBJECT: &str = "[Reminder] {name}, please complete the {title}";

/// Default body
pub const DEFAULT_BODY: &str = "Hello {name},

It looks like you have not answered the {title} yet.
Your feedback helps us improve the program, so we would be grateful
if you could take a few minutes to respond:

{link}

Thank you.";

/// Default subject line for survey invitations
pub const INVITATION_SUBJECT: &str = "[Survey] {title}";

/// Default body for survey invitations
pub const INVITATION_BODY: &str = "Hello,

You are invited to take part in the {title}.
Please follow the link below to respond:

{link}

Thank you.";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_]+)\}").expect("placeholder regex is valid"));

/// Template validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{field}` that is not one of [`PLACEHOLDERS`]
    #[error("unknown placeholder {{{0}}} (available: name, affiliation, email, title, link)")]
    UnknownPlaceholder(String),

    /// Body does not reference the survey link
    #[error("reminder body must contain {{link}}")]
    MissingLink,
}

/// Subject and body templates for reminders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderTemplate {
    subject: String,
    body: String,
}

impl ReminderTemplate {
    /// Validate and create a template
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Result<Self, TemplateError> {
        let subject = subject.into();
        let body = body.into();

        for text in [&subject, &body] {
            if let Some(unknown) = PLACEHOLDER_RE
                .captures_iter(text)
                .map(|c| c[1].to_string())
                .find(|name| !PLACEHOLDERS.contains(&name.as_str()))
            {
                return Err(TemplateError::UnknownPlaceholder(unknown));
            }
        }

        if !body.contains("{link}") {
            return Err(TemplateError::MissingLink);
        }

        Ok(Self { subject, body })
    }

    /// Subject template
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Body template
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Fill in the template for one recipient
    #[must_use]
    pub fn render(&self, entry: &RosterEntry, survey: &SurveyContext) -> Message {
        let fill = |text: &str| {
            PLACEHOLDER_RE
                .replace_all(text, |caps: &regex::Captures<'_>| match &caps[1] {
                    "name" => entry.full_name.clone(),
                    "affiliation" => entry.affiliation.clone(),
                    "email" => entry.email.clone(),
                    "title" => survey.title.clone(),
                    "link" => survey.link.clone(),
                    other => format!("{{{other}}}"),
                })
                .into_owned()
        };

        Message::new(&entry.email, fill(&self.subject), fill(&self.body))
    }
}

impl ReminderTemplate {
    /// Stock template for first-time survey invitations
    #[must_use]
    pub fn invitation() -> Self {
        Self {
            subject: INVITATION_SUBJECT.to_string(),
            body: INVITATION_BODY.to_string(),
        }
    }
}

impl Default for ReminderTemplate {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            body: DEFAULT_BODY.to_string(),
        }
    }
}
