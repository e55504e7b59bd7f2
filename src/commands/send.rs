//! Shared delivery for remind and invite: link lookup, confirmation,
//! dispatch and the optional report

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context as _, bail};

use rollcall::adapters::mail::{DryRunSender, SmtpSender};
use rollcall::config::SmtpSettings;
use rollcall::core::models::{RosterEntry, SurveyContext};
use rollcall::core::services::{ReminderTemplate, dispatch_reminders};
use rollcall::output::{DispatchKind, DispatchResult, OperationResult, OutputMode};

use super::context::Context;

/// Flags shared by the commands that send mail
pub struct SendOptions {
    pub link: Option<String>,
    pub yes: bool,
    pub dry_run: bool,
    pub report: Option<PathBuf>,
}

impl SendOptions {
    /// Survey title and link, the link taken from the flag before the config
    pub fn survey(&self, ctx: &Context) -> anyhow::Result<SurveyContext> {
        let Some(link) = self.link.clone().or_else(|| ctx.config.survey.link.clone()) else {
            bail!("No survey link: pass --link or set [survey].link");
        };
        Ok(SurveyContext::new(ctx.config.survey.title.clone(), link))
    }
}

/// Confirm, then send one message per recipient and render the summary
///
/// Fails after rendering when any send failed.
pub fn deliver(
    ctx: &Context,
    recipients: &[RosterEntry],
    template: &ReminderTemplate,
    survey: &SurveyContext,
    kind: DispatchKind,
    options: &SendOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if !options.yes && !confirm(recipients.len(), kind)? {
        OperationResult {
            success: false,
            message: format!("Aborted. No {} sent.", kind.noun()),
        }
        .render(mode);
        return Ok(());
    }

    let build = |entry: &RosterEntry| template.render(entry, survey);
    let (summary, preview) = if options.dry_run {
        let sender = DryRunSender::new();
        let summary = dispatch_reminders(recipients, build, &sender);
        (summary, sender.sent().into_iter().next())
    } else {
        let sender = SmtpSender::new(&ctx.config.smtp, SmtpSettings::credentials_from_env())
            .context("Failed to configure SMTP")?;
        (dispatch_reminders(recipients, build, &sender), None)
    };

    if let Some(path) = &options.report {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote dispatch report to {}", path.display());
    }

    let failed = summary.failed;
    DispatchResult {
        kind,
        dry_run: options.dry_run,
        summary,
        preview,
    }
    .render(mode);

    if failed > 0 {
        bail!("{failed} {} failed to send", kind.noun());
    }
    Ok(())
}

/// Ask on stdin; only "y" or "yes" proceeds
fn confirm(count: usize, kind: DispatchKind) -> anyhow::Result<bool> {
    eprint!("Send {count} {}? [y/N] ", kind.noun());
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
