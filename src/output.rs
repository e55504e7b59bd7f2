//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::adapters::table::SkippedRow;
use crate::core::models::{DispatchSummary, Message, RosterEntry, SurveyDraft};
use crate::core::services::{AnswerDistribution, RatingBreakdown, ResponseRate};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Rows a loader dropped, tagged with the source they came from
#[derive(Debug, Serialize)]
pub struct SkippedReport {
    /// Source description (path or URL)
    pub source: String,
    /// Dropped rows
    pub rows: Vec<SkippedRow>,
}

/// Result of a pending (non-respondent) listing
#[derive(Debug, Serialize)]
pub struct PendingResult {
    /// Roster entries with an email
    pub roster_total: usize,
    /// Responses loaded
    pub responses_total: usize,
    /// Who still has to answer, in roster order
    pub pending: Vec<RosterEntry>,
    /// Rows the loaders could not use
    pub skipped: Vec<SkippedReport>,
}

/// What a dispatch was sending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchKind {
    /// Follow-up to participants who have not answered
    #[default]
    Reminder,
    /// First announcement of the survey
    Invitation,
}

impl DispatchKind {
    /// Plural-safe noun for summaries, e.g. "reminder(s)"
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Reminder => "reminder(s)",
            Self::Invitation => "invitation(s)",
        }
    }
}

/// Result of a reminder or invitation dispatch
#[derive(Debug, Serialize)]
pub struct DispatchResult {
    /// Reminders or invitations
    pub kind: DispatchKind,
    /// Whether messages were only logged
    pub dry_run: bool,
    /// Per-recipient outcomes and counters
    pub summary: DispatchSummary,
    /// First rendered message, for a quick look at the template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Message>,
}

/// Result of the stats command
#[derive(Debug, Serialize)]
pub struct StatsResult {
    /// Response rate, when a roster is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<ResponseRate>,
    /// Responses loaded
    pub responses_total: usize,
    /// Satisfaction breakdown
    pub ratings: RatingBreakdown,
    /// Value counts for low-cardinality answer columns
    pub distributions: Vec<AnswerDistribution>,
}

/// Result of an LLM analysis
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    /// Model used
    pub model: String,
    /// Responses analyzed
    pub responses: usize,
    /// Model reply
    pub analysis: String,
}

/// Result of an LLM survey draft
#[derive(Debug, Serialize)]
pub struct DraftResult {
    /// Model used
    pub model: String,
    /// Parsed draft
    pub draft: SurveyDraft,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn render_skipped(skipped: &[SkippedReport]) {
    for report in skipped.iter().filter(|r| !r.rows.is_empty()) {
        println!("\n{} {} row(s) skipped in {}:", "⚠".yellow(), report.rows.len(), report.source);
        for row in &report.rows {
            println!("  row {}: {}", row.row, row.reason);
        }
    }
}

impl PendingResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.pending.is_empty() {
            println!(
                "{} All {} participant(s) have responded.",
                "✓".green().bold(),
                self.roster_total
            );
        } else {
            println!(
                "Pending: {} of {} participant(s) have not responded\n",
                self.pending.len(),
                self.roster_total
            );
            for entry in &self.pending {
                println!("  {} ({}) <{}>", entry.full_name, entry.affiliation, entry.email);
            }
        }
        render_skipped(&self.skipped);
    }
}

impl DispatchResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if let Some(preview) = &self.preview {
            println!("Preview ({}):", preview.recipient);
            println!("  Subject: {}", preview.subject);
            for line in preview.body.lines() {
                println!("  | {line}");
            }
            println!();
        }

        let verb = if self.dry_run { "Would send" } else { "Sent" };
        for outcome in &self.summary.outcomes {
            if outcome.succeeded {
                println!(
                    "  {} {} <{}>",
                    "✓".green(),
                    outcome.recipient_name,
                    outcome.recipient_email
                );
            } else {
                println!(
                    "  {} {} <{}>: {}",
                    "✗".red(),
                    outcome.recipient_name,
                    outcome.recipient_email,
                    outcome.error.as_deref().unwrap_or("unknown error")
                );
            }
        }

        println!(
            "\n{verb} {} of {} {}, {} failed",
            self.summary.succeeded,
            self.summary.total,
            self.kind.noun(),
            self.summary.failed
        );
    }
}

impl StatsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if let Some(rate) = &self.rate {
            println!("Response rate: {:.1}%", rate.rate);
            println!(
                "  {} responded, {} pending, {} on roster",
                rate.responded, rate.pending, rate.roster_total
            );
        }
        println!("Responses: {}", self.responses_total);

        println!("\nSatisfaction:");
        for count in &self.ratings.counts {
            println!("  {:<16} {}", count.rating.label(), count.count);
        }
        if self.ratings.unrated > 0 {
            println!("  {:<16} {}", "unrated", self.ratings.unrated);
        }
        println!(
            "  positive {:.1}% | neutral {:.1}% | negative {:.1}%",
            self.ratings.positive_rate, self.ratings.neutral_rate, self.ratings.negative_rate
        );

        for dist in &self.distributions {
            println!("\n{}:", dist.question.bold());
            for (value, count) in &dist.counts {
                println!("  {value:<24} {count}");
            }
        }
    }
}

impl AnalysisResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Analysis of {} response(s) ({}):\n", self.responses, self.model);
                println!("{}", self.analysis);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl DraftResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", self.draft.title.bold());
        if !self.draft.description.is_empty() {
            println!("{}", self.draft.description);
        }
        for (i, q) in self.draft.questions.iter().enumerate() {
            let marker = if q.required { " *" } else { "" };
            println!("\n{}. {}{marker} [{:?}]", i + 1, q.question, q.kind);
            for option in &q.options {
                println!("   - {option}");
            }
        }
    }
}

impl OperationResult {
    /// Create a success result
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
