//! Configuration management
//!
//! Settings live in `rollcall.toml`. Lookup order: an explicit `--config`
//! path, then `./rollcall.toml`, then `~/.config/rollcall/config.toml`.
//! Secrets never live in the file; they come from the environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::table::ColumnAliases;
use crate::core::services::template::{
    DEFAULT_BODY, DEFAULT_SUBJECT, INVITATION_BODY, INVITATION_SUBJECT,
};
use crate::core::services::{MatchMode, ReminderTemplate, TemplateError};
use crate::paths;

/// Environment variable holding the SMTP username
pub const SMTP_USERNAME_ENV: &str = "ROLLCALL_SMTP_USERNAME";

/// Environment variable holding the SMTP password
pub const SMTP_PASSWORD_ENV: &str = "ROLLCALL_SMTP_PASSWORD";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// File exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },
}

/// Top-level rollcall configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Survey identity
    #[serde(default)]
    pub survey: SurveyConfig,
    /// Where roster and responses come from
    #[serde(default)]
    pub sources: SourcesConfig,
    /// Email comparison
    #[serde(default)]
    pub matching: MatchingConfig,
    /// Header aliases for the typed mapping
    #[serde(default)]
    pub columns: ColumnAliases,
    /// Reminder subject and body templates
    #[serde(default)]
    pub reminder: ReminderConfig,
    /// Invitation subject and body templates
    #[serde(default)]
    pub invitation: InvitationConfig,
    /// Outgoing mail relay
    #[serde(default)]
    pub smtp: SmtpSettings,
    /// Language model endpoint
    #[serde(default)]
    pub llm: LlmSettings,
    /// File this config was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Survey identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Title used in reminders
    #[serde(default = "default_title")]
    pub title: String,
    /// Link recipients follow to answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

fn default_title() -> String {
    "training satisfaction survey".to_string()
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            link: None,
        }
    }
}

/// Roster and response sources (paths or URLs)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Roster of expected participants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster: Option<String>,
    /// Collected responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<String>,
}

/// Email comparison settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Exact (default) or normalized comparison
    #[serde(default)]
    pub mode: MatchMode,
}

/// Reminder templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Subject template
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Body template; must contain `{link}`
    #[serde(default = "default_body")]
    pub body: String,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_body() -> String {
    DEFAULT_BODY.to_string()
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            body: default_body(),
        }
    }
}

impl ReminderConfig {
    /// Validated template
    pub fn template(&self) -> Result<ReminderTemplate, TemplateError> {
        ReminderTemplate::new(&self.subject, &self.body)
    }
}

/// Invitation templates, used when first sending the survey out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationConfig {
    /// Subject template
    #[serde(default = "default_invitation_subject")]
    pub subject: String,
    /// Body template; must contain `{link}`
    #[serde(default = "default_invitation_body")]
    pub body: String,
}

fn default_invitation_subject() -> String {
    INVITATION_SUBJECT.to_string()
}

fn default_invitation_body() -> String {
    INVITATION_BODY.to_string()
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            subject: default_invitation_subject(),
            body: default_invitation_body(),
        }
    }
}

impl InvitationConfig {
    /// Validated template
    pub fn template(&self) -> Result<ReminderTemplate, TemplateError> {
        ReminderTemplate::new(&self.subject, &self.body)
    }
}

/// How the SMTP connection is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain connection upgraded with STARTTLS (port 587)
    #[default]
    Starttls,
    /// TLS from the first byte (port 465)
    Wrapper,
}

/// Outgoing mail relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpSettings {
    /// Relay hostname
    #[serde(default = "default_smtp_host")]
    pub host: String,
    /// Relay port
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Connection security
    #[serde(default)]
    pub tls: TlsMode,
    /// Sender address; defaults to the SMTP username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

const fn default_smtp_port() -> u16 {
    587
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            tls: TlsMode::default(),
            from: None,
        }
    }
}

impl SmtpSettings {
    /// Username and password from the environment, when both are set
    #[must_use]
    pub fn credentials_from_env() -> Option<(String, String)> {
        let user = std::env::var(SMTP_USERNAME_ENV).ok()?;
        let password = std::env::var(SMTP_PASSWORD_ENV).ok()?;
        Some((user, password))
    }
}

/// Language model endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// `OpenAI`-compatible API root
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            temperature: default_temperature(),
        }
    }
}

impl Config {
    /// Parse config text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read a config file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Find and load the config, or fall back to defaults
    ///
    /// `explicit` must exist when given. Otherwise the project config in
    /// `cwd` wins over the global one.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_file(path);
        }

        for candidate in [paths::project_config(cwd), paths::global_config()] {
            if candidate.exists() {
                log::debug!("Using config {}", candidate.display());
                return Self::load_file(&candidate);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Directory relative source paths are resolved against
    #[must_use]
    pub fn base_dir(&self, cwd: &Path) -> PathBuf {
        self.source
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf)
    }
}

/// Commented starter config written by `rollcall init`
pub const CONFIG_TEMPLATE: &str = r#"# rollcall configuration

[survey]
title = "training satisfaction survey"
# Link included in every reminder
link = "https://forms.gle/your-survey"

[sources]
# Local CSV paths (relative to this file) or sheet URLs
roster = "roster.csv"
responses = "responses.csv"

[matching]
# "exact" compares emails byte for byte; "normalized" trims and lowercases
mode = "exact"

[reminder]
# Placeholders: {name} {affiliation} {email} {title} {link}
subject = "[Reminder] {name}, please complete the {title}"
body = """
Hello {name},

It looks like you have not answered the {title} yet.
Your feedback helps us improve the program, so we would be grateful
if you could take a few minutes to respond:

{link}

Thank you."""

[invitation]
# Sent by `rollcall invite`; same placeholders
subject = "[Survey] {title}"
body = """
Hello,

You are invited to take part in the {title}.
Please follow the link below to respond:

{link}

Thank you."""

[smtp]
host = "smtp.gmail.com"
port = 587
tls = "starttls"
# from = "training@example.com"
# Credentials: ROLLCALL_SMTP_USERNAME / ROLLCALL_SMTP_PASSWORD

[llm]
base_url = "https://api.openai.com/v1"
model = "gpt-4o-mini"
# API key: OPENAI_API_KEY
"#;
